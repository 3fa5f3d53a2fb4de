use crate::parser::Parser;
use crate::result::ParseResult;
use crate::utf8::split_head;

/// Parser that never matches
///
/// Reports the head character as unexpected, or EOF on empty input.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailParser;

impl<'code> Parser<'code> for FailParser {
    fn parse(&self, input: &'code str) -> ParseResult<'code> {
        match split_head(input) {
            Some((_, head, _)) => ParseResult::unexpected_char(head, input),
            None => ParseResult::unexpected_eof(),
        }
    }
}

pub fn fail() -> FailParser {
    FailParser
}
