//! C operator tables evaluated on 32-bit integers.
//!
//! Division, remainder and overflow are reported as errors instead of trapping.
//! An out-of-range shift amount drops the shift lines from the bitwise table
//! and fails the compound-assignment table.

use crate::utils::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperatorCategory {
    Arithmetic,
    Relational,
    Logical,
    IncrementDecrement,
    Bitwise,
    Assignment,
}

impl OperatorCategory {
    pub const ALL: [OperatorCategory; 6] = [
        OperatorCategory::Arithmetic,
        OperatorCategory::Relational,
        OperatorCategory::Logical,
        OperatorCategory::IncrementDecrement,
        OperatorCategory::Bitwise,
        OperatorCategory::Assignment,
    ];

    /// Increment/decrement works on the first operand only.
    pub fn is_unary(self) -> bool {
        self == OperatorCategory::IncrementDecrement
    }

    pub fn name(self) -> &'static str {
        match self {
            OperatorCategory::Arithmetic => "arithmetic",
            OperatorCategory::Relational => "relational",
            OperatorCategory::Logical => "logical",
            OperatorCategory::IncrementDecrement => "increment",
            OperatorCategory::Bitwise => "bitwise",
            OperatorCategory::Assignment => "assignment",
        }
    }
}

impl FromStr for OperatorCategory {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "arithmetic" => Ok(OperatorCategory::Arithmetic),
            "2" | "relational" => Ok(OperatorCategory::Relational),
            "3" | "logical" => Ok(OperatorCategory::Logical),
            "4" | "increment" | "decrement" | "increment-decrement" => {
                Ok(OperatorCategory::IncrementDecrement)
            }
            "5" | "bitwise" => Ok(OperatorCategory::Bitwise),
            "6" | "assignment" => Ok(OperatorCategory::Assignment),
            _ => Err(CalcError::UnknownCategory { name: s.to_string() }),
        }
    }
}

impl fmt::Display for OperatorCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationLine {
    pub expression: String,
    pub value: i32,
}

fn line(expression: String, value: i32) -> OperationLine {
    OperationLine { expression, value }
}

fn checked(expression: String, value: Option<i32>) -> Result<OperationLine> {
    match value {
        Some(v) => Ok(line(expression, v)),
        None => Err(CalcError::ArithmeticOverflow { expression }),
    }
}

fn checked_div(a: i32, b: i32, op: &str) -> Result<i32> {
    let expression = format!("{} {} {}", a, op, b);
    if b == 0 {
        return Err(CalcError::DivisionByZero { expression });
    }
    let value = if op.starts_with('%') {
        a.checked_rem(b)
    } else {
        a.checked_div(b)
    };
    value.ok_or(CalcError::ArithmeticOverflow { expression })
}

fn shift_amount(b: i32) -> Result<u32> {
    if (0..32).contains(&b) {
        Ok(b as u32)
    } else {
        Err(CalcError::InvalidShift { amount: b })
    }
}

fn as_flag(value: bool) -> i32 {
    i32::from(value)
}

pub fn evaluate(category: OperatorCategory, a: i32, b: i32) -> Result<Vec<OperationLine>> {
    match category {
        OperatorCategory::Arithmetic => arithmetic(a, b),
        OperatorCategory::Relational => Ok(relational(a, b)),
        OperatorCategory::Logical => Ok(logical(a, b)),
        OperatorCategory::IncrementDecrement => increment_decrement(a),
        OperatorCategory::Bitwise => Ok(bitwise(a, b)),
        OperatorCategory::Assignment => assignment(a, b),
    }
}

fn arithmetic(a: i32, b: i32) -> Result<Vec<OperationLine>> {
    Ok(vec![
        checked(format!("{} + {}", a, b), a.checked_add(b))?,
        checked(format!("{} - {}", a, b), a.checked_sub(b))?,
        checked(format!("{} * {}", a, b), a.checked_mul(b))?,
        line(format!("{} / {}", a, b), checked_div(a, b, "/")?),
        line(format!("{} % {}", a, b), checked_div(a, b, "%")?),
    ])
}

fn relational(a: i32, b: i32) -> Vec<OperationLine> {
    vec![
        line(format!("{} == {}", a, b), as_flag(a == b)),
        line(format!("{} != {}", a, b), as_flag(a != b)),
        line(format!("{} > {}", a, b), as_flag(a > b)),
        line(format!("{} < {}", a, b), as_flag(a < b)),
        line(format!("{} >= {}", a, b), as_flag(a >= b)),
        line(format!("{} <= {}", a, b), as_flag(a <= b)),
    ]
}

fn logical(a: i32, b: i32) -> Vec<OperationLine> {
    let (x, y) = (a != 0, b != 0);
    vec![
        line(format!("{} AND {}", a, b), as_flag(x && y)),
        line(format!("{} OR {}", a, b), as_flag(x || y)),
        line(format!("NOT {}", a), as_flag(!x)),
        line(format!("NOT {}", b), as_flag(!y)),
    ]
}

/// Threads `a` through `++a`, `a++`, `--a`, `a--` in order.
fn increment_decrement(a: i32) -> Result<Vec<OperationLine>> {
    let mut lines = Vec::with_capacity(4);
    let mut current = a;

    let bumped = current.checked_add(1);
    lines.push(checked(format!("++{}", current), bumped)?);
    current += 1;

    lines.push(line(format!("{}++", current), current));
    current = current.checked_add(1).ok_or(CalcError::ArithmeticOverflow {
        expression: format!("{}++", current),
    })?;

    lines.push(checked(format!("--{}", current), current.checked_sub(1))?);
    current -= 1;

    lines.push(line(format!("{}--", current), current));
    Ok(lines)
}

/// Shift lines are left out when `b` is not a valid shift amount; the rest of the table stands.
fn bitwise(a: i32, b: i32) -> Vec<OperationLine> {
    let mut lines = vec![
        line(format!("{} & {}", a, b), a & b),
        line(format!("{} | {}", a, b), a | b),
        line(format!("{} ^ {}", a, b), a ^ b),
        line(format!("~{}", a), !a),
        line(format!("~{}", b), !b),
    ];
    match shift_amount(b) {
        Ok(shift) => {
            lines.push(line(format!("{} << {}", a, b), a << shift));
            lines.push(line(format!("{} >> {}", a, b), a >> shift));
        }
        Err(e) => tracing::warn!("Skipping shift operators: {}", e),
    }
    lines
}

/// Applies each compound assignment to a running `a`; every line shows the value afterwards.
fn assignment(a: i32, b: i32) -> Result<Vec<OperationLine>> {
    let ops = ["+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<=", ">>="];
    let mut lines = Vec::with_capacity(ops.len());
    let mut current = a;

    for op in ops {
        let expression = format!("{} {} {}", current, op, b);
        let next = match op {
            "+=" => current.checked_add(b),
            "-=" => current.checked_sub(b),
            "*=" => current.checked_mul(b),
            "/=" => Some(checked_div(current, b, op)?),
            "%=" => Some(checked_div(current, b, op)?),
            "&=" => Some(current & b),
            "|=" => Some(current | b),
            "^=" => Some(current ^ b),
            "<<=" => Some(current << shift_amount(b)?),
            ">>=" => Some(current >> shift_amount(b)?),
            _ => None,
        };
        let entry = checked(expression, next)?;
        current = entry.value;
        lines.push(entry);
    }
    Ok(lines)
}

/// C scalar types the `sizeof` lookup knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Int,
    Float,
    Char,
    Double,
}

impl FromStr for DataType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "int" => Ok(DataType::Int),
            "float" => Ok(DataType::Float),
            "char" => Ok(DataType::Char),
            "double" => Ok(DataType::Double),
            other => Err(CalcError::UnknownDataType {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            DataType::Int => "int",
            DataType::Float => "float",
            DataType::Char => "char",
            DataType::Double => "double",
        };
        write!(f, "{}", name)
    }
}

pub fn size_of(data_type: DataType) -> usize {
    match data_type {
        DataType::Int => std::mem::size_of::<i32>(),
        DataType::Float => std::mem::size_of::<f32>(),
        DataType::Char => std::mem::size_of::<u8>(),
        DataType::Double => std::mem::size_of::<f64>(),
    }
}
