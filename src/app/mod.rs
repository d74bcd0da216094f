pub mod exercises;

#[cfg(feature = "cli")]
use crate::config::Command;
#[cfg(feature = "cli")]
use crate::core::{Exercise, PiPrecision, Result, SettingsProvider};
#[cfg(feature = "cli")]
use crate::utils::input::{parse_token, TokenReader};
#[cfg(feature = "cli")]
use exercises::{OperatorDemo, Sine, SizeOf, Spell, ToBinary, ToDecimal};
#[cfg(feature = "cli")]
use std::io::BufRead;

/// Turns a parsed subcommand into an exercise, pulling missing operands from `input`.
#[cfg(feature = "cli")]
pub fn build_exercise<R: BufRead>(
    command: &Command,
    settings: &impl SettingsProvider,
    input: &mut TokenReader<R>,
) -> Result<Box<dyn Exercise>> {
    let exercise: Box<dyn Exercise> = match command {
        Command::ToBinary { number } => Box::new(ToBinary {
            decimal: or_read(*number, input, "a decimal number")?,
        }),
        Command::ToDecimal { binary } => {
            let raw = or_read_token(binary.as_deref(), input, "a binary number")?;
            Box::new(ToDecimal {
                binary: raw.parse()?,
            })
        }
        Command::Sine { degrees, full_pi } => Box::new(Sine {
            degrees: or_read(*degrees, input, "an angle in degrees")?,
            pi: if *full_pi {
                PiPrecision::Full
            } else {
                settings.pi_precision()
            },
            precision: settings.float_precision(),
        }),
        Command::Spell { number } => Box::new(Spell {
            number: or_read(*number, input, "an integer")?,
        }),
        Command::Ops { category, a, b } => {
            let category = category.parse::<crate::core::operators::OperatorCategory>()?;
            let a = or_read(*a, input, "the first operand")?;
            let b = if category.is_unary() {
                b.unwrap_or(0)
            } else {
                or_read(*b, input, "the second operand")?
            };
            Box::new(OperatorDemo { category, a, b })
        }
        Command::Sizeof { data_type } => {
            let raw = or_read_token(data_type.as_deref(), input, "a data type")?;
            Box::new(SizeOf {
                data_type: raw.parse()?,
            })
        }
    };

    tracing::debug!("Built exercise '{}'", exercise.name());
    Ok(exercise)
}

#[cfg(feature = "cli")]
fn or_read<T, R>(given: Option<T>, input: &mut TokenReader<R>, expected: &str) -> Result<T>
where
    T: std::str::FromStr,
    R: BufRead,
{
    match given {
        Some(value) => Ok(value),
        None => input.next_value(expected),
    }
}

#[cfg(feature = "cli")]
fn or_read_token<R: BufRead>(
    given: Option<&str>,
    input: &mut TokenReader<R>,
    expected: &str,
) -> Result<String> {
    match given {
        Some(raw) => parse_token(raw, expected),
        None => input.next_value(expected),
    }
}
