use crate::parser::Parser;
use crate::result::ParseResult;
use crate::utf8::split_head;
use std::borrow::Cow;

/// Parser that matches an exact string prefix
#[derive(Debug, Clone)]
pub struct LiteralParser {
    expected: Cow<'static, str>,
}

impl LiteralParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for LiteralParser {
    fn parse(&self, input: &'code str) -> ParseResult<'code> {
        // Empty input is EOF even for an empty literal
        let Some((_, head, _)) = split_head(input) else {
            return ParseResult::unexpected_eof();
        };
        match input.strip_prefix(self.expected.as_ref()) {
            Some(rest) => ParseResult::ok(&input[..self.expected.len()], rest),
            None => ParseResult::unexpected_char(head, input),
        }
    }
}

/// Convenience function to create a LiteralParser
///
/// `literal("123")` on `"12345"` matches `"123"` and leaves `"45"`.
pub fn literal(expected: impl Into<Cow<'static, str>>) -> LiteralParser {
    LiteralParser::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Status;

    #[test]
    fn test_exact_match() {
        let result = literal("hello").parse("hello");
        assert_eq!(result, ParseResult::ok("hello", ""));
    }

    #[test]
    fn test_prefix_match_with_remaining() {
        let result = literal("123").parse("12345");
        assert_eq!(result, ParseResult::ok("123", "45"));
    }

    #[test]
    fn test_mismatch_reports_head_char() {
        let result = literal("hello").parse("help");
        assert_eq!(result.status(), Status::UnexpectedChar);
        assert_eq!(result.matched(), "h");
        assert_eq!(result.remaining(), "help");
    }

    #[test]
    fn test_input_shorter_than_literal() {
        let result = literal("hello").parse("he");
        assert_eq!(result.status(), Status::UnexpectedChar);
        assert_eq!(result.remaining(), "he");
    }

    #[test]
    fn test_empty_input_is_eof() {
        assert_eq!(literal("a").parse(""), ParseResult::unexpected_eof());
        assert_eq!(literal("").parse(""), ParseResult::unexpected_eof());
    }

    #[test]
    fn test_empty_literal_matches_nothing() {
        let result = literal("").parse("abc");
        assert_eq!(result, ParseResult::ok("", "abc"));
    }

    #[test]
    fn test_unicode_literal() {
        let result = literal("こんにちは").parse("こんにちは世界");
        assert_eq!(result, ParseResult::ok("こんにちは", "世界"));
    }

    #[test]
    fn test_owned_literal() {
        let keyword = String::from("true");
        let result = literal(keyword).parse("true,");
        assert_eq!(result, ParseResult::ok("true", ","));
    }
}
