use small_calc::app::exercises::{OperatorDemo, Sine, SizeOf, Spell, ToBinary, ToDecimal};
use small_calc::core::operators::{DataType, OperatorCategory};
use small_calc::core::OutputFormat;
use small_calc::{
    binary_to_decimal, decimal_to_binary, factorial, sine_degrees, spell_digits, BinaryDigits,
    CalcError, ExerciseRunner, PiPrecision,
};

#[test]
fn test_converter_properties() {
    assert_eq!(decimal_to_binary(0).unwrap().get(), 0);
    assert_eq!(binary_to_decimal(BinaryDigits::ZERO), 0);
    assert_eq!(decimal_to_binary(5).unwrap().get(), 101);
    assert_eq!(decimal_to_binary(10).unwrap().get(), 1010);
    assert_eq!(binary_to_decimal(BinaryDigits::try_from(1010u128).unwrap()), 10);

    let mut d: i64 = 1;
    while d < (1 << 31) {
        for probe in [d - 1, d, d + 1] {
            let back = binary_to_decimal(decimal_to_binary(probe).unwrap());
            assert_eq!(back, probe as u64);
        }
        d = d * 3 + 1;
    }
}

#[test]
fn test_sine_and_factorial_properties() {
    assert!((sine_degrees(30.0, PiPrecision::Legacy).unwrap() - 0.5).abs() < 1e-3);
    assert!((sine_degrees(90.0, PiPrecision::Legacy).unwrap() - 1.0).abs() < 1e-3);
    assert_eq!(factorial(0).unwrap(), 1);
    assert_eq!(factorial(5).unwrap(), 120);
}

#[test]
fn test_spelling() {
    assert_eq!(spell_digits(120), vec!["one", "two", "zero"]);
    assert_eq!(spell_digits(0), vec!["zero"]);
}

#[test]
fn test_runner_text_output() {
    let out = ExerciseRunner::new(ToBinary { decimal: 42 }).run().unwrap();
    assert_eq!(out, "Decimal: 42\nBinary equivalent: 101010");

    let out = ExerciseRunner::new(ToDecimal {
        binary: "101010".parse().unwrap(),
    })
    .run()
    .unwrap();
    assert_eq!(out, "Binary: 101010\nDecimal equivalent: 42");

    let out = ExerciseRunner::new(SizeOf {
        data_type: DataType::Int,
    })
    .run()
    .unwrap();
    assert_eq!(out, "Size of int: 4 bytes");
}

#[test]
fn test_runner_json_output() {
    let out = ExerciseRunner::new(Sine {
        degrees: 30.0,
        pi: PiPrecision::Full,
        precision: 4,
    })
    .with_format(OutputFormat::Json)
    .run()
    .unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["exercise"], "sine");
    let lines = value["lines"].as_array().unwrap();
    assert_eq!(lines.last().unwrap()["label"], "sin(30.0000)");
    assert_eq!(lines.last().unwrap()["value"], "0.5000");

    let out = ExerciseRunner::new(Spell { number: -7 })
        .with_format(OutputFormat::Json)
        .run()
        .unwrap();
    assert!(out.contains("minus seven"));
}

#[test]
fn test_invalid_inputs_are_errors() {
    assert!(matches!(
        ExerciseRunner::new(ToBinary { decimal: -10 }).run(),
        Err(CalcError::NegativeOperand { value: -10 })
    ));
    assert!(matches!(
        "1021".parse::<BinaryDigits>(),
        Err(CalcError::InvalidBinaryDigit { digit: '2', .. })
    ));
    assert!(matches!(
        ExerciseRunner::new(OperatorDemo {
            category: OperatorCategory::Arithmetic,
            a: 1,
            b: 0,
        })
        .run(),
        Err(CalcError::DivisionByZero { .. })
    ));
    assert!(matches!(
        ExerciseRunner::new(Sine {
            degrees: f64::NAN,
            pi: PiPrecision::Legacy,
            precision: 6,
        })
        .run(),
        Err(CalcError::NonFiniteAngle { .. })
    ));
    assert!(matches!(
        sine_degrees(1e100, PiPrecision::Legacy),
        Err(CalcError::SeriesOverflow { .. })
    ));
    assert!(matches!(
        "0b_".parse::<BinaryDigits>(),
        Err(CalcError::InvalidInput { .. })
    ));
}
