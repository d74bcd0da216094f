const DIGIT_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// English word for every decimal digit of `number`, most significant first.
pub fn spell_digits(number: i64) -> Vec<&'static str> {
    let mut words = Vec::new();
    if number < 0 {
        words.push("minus");
    }
    // unsigned_abs keeps i64::MIN in range
    words.extend(
        number
            .unsigned_abs()
            .to_string()
            .bytes()
            .map(|b| DIGIT_WORDS[usize::from(b - b'0')]),
    );
    words
}

pub fn spell_digits_line(number: i64) -> String {
    spell_digits(number).join(" ")
}
