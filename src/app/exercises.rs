use crate::core::converter::{binary_to_decimal, decimal_to_binary};
use crate::core::operators::{evaluate, size_of, DataType, OperatorCategory};
use crate::core::series::{degrees_to_radians, sine_degrees, SINE_TERMS};
use crate::core::speller::spell_digits_line;
use crate::core::{BinaryDigits, Exercise, PiPrecision, Report, Result};

#[derive(Debug, Clone)]
pub struct ToBinary {
    pub decimal: i64,
}

impl Exercise for ToBinary {
    fn name(&self) -> &'static str {
        "to-binary"
    }

    fn run(&self) -> Result<Report> {
        let binary = decimal_to_binary(self.decimal)?;
        Ok(Report::new(self.name())
            .line("Decimal", self.decimal)
            .line("Binary equivalent", binary))
    }
}

#[derive(Debug, Clone)]
pub struct ToDecimal {
    pub binary: BinaryDigits,
}

impl Exercise for ToDecimal {
    fn name(&self) -> &'static str {
        "to-decimal"
    }

    fn run(&self) -> Result<Report> {
        Ok(Report::new(self.name())
            .line("Binary", self.binary)
            .line("Decimal equivalent", binary_to_decimal(self.binary)))
    }
}

#[derive(Debug, Clone)]
pub struct Sine {
    pub degrees: f64,
    pub pi: PiPrecision,
    pub precision: usize,
}

impl Exercise for Sine {
    fn name(&self) -> &'static str {
        "sine"
    }

    fn run(&self) -> Result<Report> {
        let value = sine_degrees(self.degrees, self.pi)?;
        let p = self.precision;
        Ok(Report::new(self.name())
            .line("Degrees", format!("{:.*}", p, self.degrees))
            .line("Radians", format!("{:.*}", p, degrees_to_radians(self.degrees, self.pi)))
            .line("Terms", SINE_TERMS)
            .line(format!("sin({:.*})", p, self.degrees), format!("{:.*}", p, value)))
    }
}

#[derive(Debug, Clone)]
pub struct Spell {
    pub number: i64,
}

impl Exercise for Spell {
    fn name(&self) -> &'static str {
        "spell"
    }

    fn run(&self) -> Result<Report> {
        Ok(Report::new(self.name())
            .line("Number", self.number)
            .line("Spelled", spell_digits_line(self.number)))
    }
}

#[derive(Debug, Clone)]
pub struct OperatorDemo {
    pub category: OperatorCategory,
    pub a: i32,
    pub b: i32,
}

impl Exercise for OperatorDemo {
    fn name(&self) -> &'static str {
        "ops"
    }

    fn run(&self) -> Result<Report> {
        let report = evaluate(self.category, self.a, self.b)?
            .into_iter()
            .fold(Report::new(self.name()), |report, op| {
                report.line(op.expression, op.value)
            });
        Ok(report)
    }
}

#[derive(Debug, Clone)]
pub struct SizeOf {
    pub data_type: DataType,
}

impl Exercise for SizeOf {
    fn name(&self) -> &'static str {
        "sizeof"
    }

    fn run(&self) -> Result<Report> {
        Ok(Report::new(self.name()).line(
            format!("Size of {}", self.data_type),
            format!("{} bytes", size_of(self.data_type)),
        ))
    }
}
