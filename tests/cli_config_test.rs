use clap::Parser;
use small_calc::app::build_exercise;
use small_calc::core::OutputFormat;
use small_calc::utils::input::TokenReader;
use small_calc::utils::validation::Validate;
use small_calc::{CliConfig, Command, ExerciseRunner, PiPrecision, TomlConfig};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

fn run_cli(args: &[&str], settings: &TomlConfig, stdin: &str) -> String {
    let config = CliConfig::try_parse_from(args).unwrap();
    let mut input = TokenReader::new(Cursor::new(stdin.to_string()));
    let exercise = build_exercise(&config.command, settings, &mut input).unwrap();
    let format = config.format.unwrap_or(settings.output.format);
    ExerciseRunner::new(exercise).with_format(format).run().unwrap()
}

#[test]
fn test_parse_subcommands() {
    let config = CliConfig::try_parse_from(["small-calc", "-v", "to-binary", "12"]).unwrap();
    assert!(config.verbose);
    assert!(matches!(config.command, Command::ToBinary { number: Some(12) }));

    let config = CliConfig::try_parse_from(["small-calc", "sine", "-45", "--full-pi"]).unwrap();
    match config.command {
        Command::Sine { degrees, full_pi } => {
            assert_eq!(degrees, Some(-45.0));
            assert!(full_pi);
        }
        other => panic!("unexpected command: {:?}", other),
    }

    let config =
        CliConfig::try_parse_from(["small-calc", "--format", "json", "ops", "bitwise", "6", "-1"])
            .unwrap();
    assert_eq!(config.format, Some(OutputFormat::Json));

    assert!(CliConfig::try_parse_from(["small-calc", "launch"]).is_err());
}

#[test]
fn test_end_to_end_with_stdin() {
    let settings = TomlConfig::default();

    let out = run_cli(&["small-calc", "to-binary"], &settings, "10\n");
    assert_eq!(out, "Decimal: 10\nBinary equivalent: 1010");

    let out = run_cli(&["small-calc", "spell"], &settings, "2024");
    assert_eq!(out, "Number: 2024\nSpelled: two zero two four");

    let out = run_cli(&["small-calc", "sizeof"], &settings, "char\n");
    assert_eq!(out, "Size of char: 1 bytes");

    let out = run_cli(&["small-calc", "ops", "bitwise", "6", "-1"], &settings, "");
    assert!(out.starts_with("6 & -1: 6\n6 | -1: -1"));
    assert!(!out.contains("<<"));
}

#[test]
fn test_settings_file_drives_output() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[output]\nformat = \"json\"\nfloat_precision = 2\n\n[sine]\npi = \"full\"\n")
        .unwrap();

    let settings = TomlConfig::from_file(temp_file.path()).unwrap();
    assert!(settings.validate().is_ok());
    assert_eq!(settings.sine.pi, PiPrecision::Full);

    let out = run_cli(&["small-calc", "sine", "90"], &settings, "");
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["lines"][3]["label"], "sin(90.00)");
    assert_eq!(value["lines"][3]["value"], "1.00");

    // the command-line format wins over the file
    let out = run_cli(&["small-calc", "--format", "text", "to-binary", "3"], &settings, "");
    assert_eq!(out, "Decimal: 3\nBinary equivalent: 11");
}
