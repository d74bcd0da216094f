use anyhow::Context;
use clap::Parser;
use small_calc::app::build_exercise;
use small_calc::utils::input::TokenReader;
use small_calc::utils::logger;
use small_calc::{CalcError, CliConfig, ExerciseRunner, TomlConfig};

/// Settings are validated here, before the logger sees `[logging] level`.
fn load_settings(config: &CliConfig) -> anyhow::Result<TomlConfig> {
    let path = config.config.as_deref();
    TomlConfig::load_validated(path)
        .with_context(|| format!("Failed to load config file '{}'", path.unwrap_or("<defaults>")))
}

fn fail(e: &CalcError) -> ! {
    tracing::error!("❌ {} (exit code {})", e, e.exit_code());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() {
    let config = CliConfig::parse();

    let settings = match load_settings(&config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            match e.downcast_ref::<CalcError>() {
                Some(cause) => eprintln!("💡 {}", cause.recovery_suggestion()),
                None => eprintln!("💡 Make sure the file exists and is valid TOML format"),
            }
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(config.verbose, settings.log_level());
    tracing::debug!("CLI config: {:?}", config);

    let format = config.format.unwrap_or(settings.output.format);

    let stdin = std::io::stdin();
    let mut input = TokenReader::new(stdin.lock());

    let exercise = match build_exercise(&config.command, &settings, &mut input) {
        Ok(exercise) => exercise,
        Err(e) => fail(&e),
    };

    match ExerciseRunner::new(exercise).with_format(format).run() {
        Ok(output) => println!("{}", output),
        Err(e) => fail(&e),
    }
}
