pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::OutputFormat;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "small-calc")]
#[command(about = "Beginner console exercises: binary conversion, sine series, digit spelling, C operators")]
pub struct CliConfig {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format, overrides the settings file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Operands left out on the command line are read from standard input.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert a non-negative decimal number to binary
    ToBinary {
        #[arg(allow_negative_numbers = true)]
        number: Option<i64>,
    },

    /// Convert a binary number (digits 0 and 1, optional 0b prefix) to decimal
    ToDecimal { binary: Option<String> },

    /// Approximate sin(x) for an angle in degrees with a 10-term series
    Sine {
        #[arg(allow_negative_numbers = true)]
        degrees: Option<f64>,

        /// Use the full-precision pi instead of 3.14159
        #[arg(long)]
        full_pi: bool,
    },

    /// Spell every digit of an integer as a word
    Spell {
        #[arg(allow_negative_numbers = true)]
        number: Option<i64>,
    },

    /// Evaluate a table of C operators on two integers
    Ops {
        /// arithmetic, relational, logical, increment, bitwise or assignment
        category: String,
        #[arg(allow_negative_numbers = true)]
        a: Option<i32>,
        #[arg(allow_negative_numbers = true)]
        b: Option<i32>,
    },

    /// Print the size of a C data type (int, float, char, double)
    Sizeof { data_type: Option<String> },
}
