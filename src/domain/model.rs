use crate::utils::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A number whose base-10 digits are all 0 or 1, read as a binary numeral.
///
/// `101` stands for five. A `u128` holds 39 decimal digits, so binary numerals of
/// up to 39 bits are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BinaryDigits(u128);

impl BinaryDigits {
    pub const ZERO: BinaryDigits = BinaryDigits(0);

    /// Caller guarantees every decimal digit is 0 or 1.
    pub(crate) fn new_unchecked(raw: u128) -> Self {
        BinaryDigits(raw)
    }

    pub fn get(self) -> u128 {
        self.0
    }
}

impl TryFrom<u128> for BinaryDigits {
    type Error = CalcError;

    fn try_from(raw: u128) -> Result<Self, Self::Error> {
        let mut rest = raw;
        while rest > 0 {
            let digit = rest % 10;
            if digit > 1 {
                return Err(CalcError::InvalidBinaryDigit {
                    input: raw.to_string(),
                    digit: char::from(b'0' + digit as u8),
                });
            }
            rest /= 10;
        }
        Ok(BinaryDigits(raw))
    }
}

impl FromStr for BinaryDigits {
    type Err = CalcError;

    /// Accepts an optional `0b` prefix and `_` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed
            .strip_prefix("0b")
            .or_else(|| trimmed.strip_prefix("0B"))
            .unwrap_or(trimmed);

        let mut raw: u128 = 0;
        let mut digits = 0usize;
        for c in body.chars() {
            let bit = match c {
                '0' => 0,
                '1' => 1,
                '_' => continue,
                other => {
                    return Err(CalcError::InvalidBinaryDigit {
                        input: s.to_string(),
                        digit: other,
                    })
                }
            };
            raw = raw
                .checked_mul(10)
                .and_then(|v| v.checked_add(bit))
                .ok_or_else(|| CalcError::InvalidInput {
                    token: s.to_string(),
                    expected: "a binary number of at most 39 digits".to_string(),
                })?;
            digits += 1;
        }

        if digits == 0 {
            return Err(CalcError::InvalidInput {
                token: s.to_string(),
                expected: "a binary number".to_string(),
            });
        }
        Ok(BinaryDigits(raw))
    }
}

impl fmt::Display for BinaryDigits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which value of pi the degree conversion uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PiPrecision {
    /// 3.14159
    #[default]
    Legacy,
    Full,
}

impl PiPrecision {
    pub fn value(self) -> f64 {
        match self {
            PiPrecision::Legacy => 3.14159,
            PiPrecision::Full => std::f64::consts::PI,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    pub label: String,
    pub value: String,
}

/// Labelled result lines produced by one exercise run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub exercise: String,
    pub lines: Vec<ReportLine>,
}

impl Report {
    pub fn new(exercise: &str) -> Self {
        Self {
            exercise: exercise.to_string(),
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, label: impl Into<String>, value: impl fmt::Display) -> Self {
        self.lines.push(ReportLine {
            label: label.into(),
            value: value.to_string(),
        });
        self
    }

    pub fn render(&self, format: OutputFormat) -> crate::utils::error::Result<String> {
        match format {
            OutputFormat::Text => Ok(self
                .lines
                .iter()
                .map(|l| format!("{}: {}", l.label, l.value))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}
