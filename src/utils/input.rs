use crate::utils::error::{CalcError, Result};
use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

/// Reads whitespace-delimited tokens, pulling more lines only when the buffer runs dry.
pub struct TokenReader<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Next token parsed as `T`. `expected` names the value in error messages.
    pub fn next_value<T: FromStr>(&mut self, expected: &str) -> Result<T> {
        let token = self
            .next_token()?
            .ok_or_else(|| CalcError::UnexpectedEndOfInput {
                expected: expected.to_string(),
            })?;
        parse_token(&token, expected)
    }
}

pub fn parse_token<T: FromStr>(token: &str, expected: &str) -> Result<T> {
    token.parse::<T>().map_err(|_| CalcError::InvalidInput {
        token: token.to_string(),
        expected: expected.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_tokens_span_lines() {
        let mut reader = TokenReader::new(Cursor::new("12  7\n\n  -3\n"));
        assert_eq!(reader.next_value::<i64>("a number").unwrap(), 12);
        assert_eq!(reader.next_value::<i64>("a number").unwrap(), 7);
        assert_eq!(reader.next_value::<i64>("a number").unwrap(), -3);
        assert!(reader.next_token().unwrap().is_none());
    }

    #[test]
    fn test_end_of_input() {
        let mut reader = TokenReader::new(Cursor::new(""));
        let err = reader.next_value::<f64>("an angle").unwrap_err();
        assert!(matches!(err, CalcError::UnexpectedEndOfInput { .. }));
    }

    #[test]
    fn test_malformed_token() {
        let mut reader = TokenReader::new(Cursor::new("ten"));
        let err = reader.next_value::<i64>("a number").unwrap_err();
        match err {
            CalcError::InvalidInput { token, expected } => {
                assert_eq!(token, "ten");
                assert_eq!(expected, "a number");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
