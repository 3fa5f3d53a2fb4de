use crate::parser::Parser;
use crate::result::ParseResult;
use crate::utf8::split_head;

/// Parser that consumes any single character
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyParser;

impl AnyParser {
    pub fn new() -> Self {
        AnyParser
    }
}

impl<'code> Parser<'code> for AnyParser {
    fn parse(&self, input: &'code str) -> ParseResult<'code> {
        match split_head(input) {
            Some((_, head, rest)) => ParseResult::ok(head, rest),
            None => ParseResult::unexpected_eof(),
        }
    }
}

/// Convenience function to create an AnyParser
pub fn consume_any() -> AnyParser {
    AnyParser::new()
}
