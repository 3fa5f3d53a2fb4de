use crate::parser::Parser;
use crate::result::ParseResult;
use crate::utf8::split_head;

/// Parser that matches one specific character
#[derive(Debug, Clone, Copy)]
pub struct IsChar(char);

impl<'code> Parser<'code> for IsChar {
    fn parse(&self, input: &'code str) -> ParseResult<'code> {
        match split_head(input) {
            None => ParseResult::unexpected_eof(),
            Some((ch, head, rest)) if ch == self.0 => ParseResult::ok(head, rest),
            Some((_, head, _)) => ParseResult::unexpected_char(head, input),
        }
    }
}

/// Convenience function to create a parser that matches a specific character
///
/// `char(' ')` parses exactly one space.
pub fn char(expected: char) -> IsChar {
    IsChar(expected)
}
