pub mod converter;
pub mod operators;
pub mod runner;
pub mod series;
pub mod speller;

pub use crate::domain::model::{BinaryDigits, OutputFormat, PiPrecision, Report, ReportLine};
pub use crate::domain::ports::{Exercise, SettingsProvider};
pub use crate::utils::error::Result;
