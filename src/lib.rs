pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::converter::{binary_to_decimal, decimal_to_binary};
pub use crate::core::series::{factorial, sine_degrees, sine_series, SINE_TERMS};
pub use crate::core::speller::spell_digits;
pub use crate::core::{runner::ExerciseRunner, BinaryDigits, Exercise, PiPrecision};
pub use crate::utils::error::{CalcError, Result};
