use crate::domain::model::BinaryDigits;
use crate::utils::error::{CalcError, Result};

/// Spells `decimal` in binary using decimal digits: `5 -> 101`, `10 -> 1010`.
///
/// Negative operands are rejected. Operands of 2^39 and above are rejected too,
/// because their binary form has more digits than a `u128` holds.
pub fn decimal_to_binary(decimal: i64) -> Result<BinaryDigits> {
    if decimal < 0 {
        return Err(CalcError::NegativeOperand { value: decimal });
    }

    let overflow = || CalcError::BinaryOverflow { value: decimal };
    let mut rest = decimal as u64;
    let mut binary: u128 = 0;
    let mut base: u128 = 1;

    while rest > 0 {
        let bit = u128::from(rest % 2);
        binary = bit
            .checked_mul(base)
            .and_then(|place| binary.checked_add(place))
            .ok_or_else(overflow)?;
        rest /= 2;
        if rest > 0 {
            base = base.checked_mul(10).ok_or_else(overflow)?;
        }
    }

    Ok(BinaryDigits::new_unchecked(binary))
}

/// Reads the decimal digits of `binary` as bits: `1010 -> 10`.
pub fn binary_to_decimal(binary: BinaryDigits) -> u64 {
    let mut rest = binary.get();
    let mut decimal: u64 = 0;
    let mut base: u64 = 1;

    // at most 39 digits, so base tops out at 2^38
    while rest > 0 {
        decimal += (rest % 10) as u64 * base;
        rest /= 10;
        base *= 2;
    }
    decimal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(raw: u128) -> BinaryDigits {
        BinaryDigits::try_from(raw).unwrap()
    }

    #[test]
    fn test_decimal_to_binary() {
        assert_eq!(decimal_to_binary(0).unwrap().get(), 0);
        assert_eq!(decimal_to_binary(1).unwrap().get(), 1);
        assert_eq!(decimal_to_binary(5).unwrap().get(), 101);
        assert_eq!(decimal_to_binary(10).unwrap().get(), 1010);
        assert_eq!(decimal_to_binary(255).unwrap().get(), 11111111);
    }

    #[test]
    fn test_binary_to_decimal() {
        assert_eq!(binary_to_decimal(BinaryDigits::ZERO), 0);
        assert_eq!(binary_to_decimal(bits(1010)), 10);
        assert_eq!(binary_to_decimal(bits(11111111)), 255);
    }

    #[test]
    fn test_round_trip() {
        let samples = [0i64, 1, 2, 3, 7, 8, 1023, 65_535, 1 << 20, i32::MAX as i64];
        for d in samples {
            assert_eq!(binary_to_decimal(decimal_to_binary(d).unwrap()), d as u64, "{}", d);
        }
        for d in (0..100_000i64).step_by(37) {
            assert_eq!(binary_to_decimal(decimal_to_binary(d).unwrap()), d as u64);
        }
    }

    #[test]
    fn test_widest_supported_operand() {
        let max = (1i64 << 39) - 1;
        let binary = decimal_to_binary(max).unwrap();
        assert_eq!(binary.to_string(), "1".repeat(39));
        assert_eq!(binary_to_decimal(binary), max as u64);
    }

    #[test]
    fn test_rejects_negative_and_overflow() {
        assert!(matches!(
            decimal_to_binary(-4),
            Err(CalcError::NegativeOperand { value: -4 })
        ));
        assert!(matches!(
            decimal_to_binary(1i64 << 39),
            Err(CalcError::BinaryOverflow { .. })
        ));
        assert!(decimal_to_binary(i64::MAX).is_err());
    }
}
