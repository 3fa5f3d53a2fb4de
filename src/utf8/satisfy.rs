use crate::parser::Parser;
use crate::result::ParseResult;
use crate::utf8::split_head;

/// Parser that matches one character accepted by a predicate
#[derive(Clone, Copy)]
pub struct Satisfy<F> {
    predicate: F,
}

impl<F> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    pub fn new(predicate: F) -> Self {
        Satisfy { predicate }
    }
}

impl<'code, F> Parser<'code> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    fn parse(&self, input: &'code str) -> ParseResult<'code> {
        match split_head(input) {
            None => ParseResult::unexpected_eof(),
            Some((ch, head, rest)) if (self.predicate)(ch) => ParseResult::ok(head, rest),
            Some((_, head, _)) => ParseResult::unexpected_char(head, input),
        }
    }
}

/// Convenience function to create a Satisfy parser
///
/// `satisfy(|c| c.is_ascii_digit())` parses any one digit.
pub fn satisfy<F>(predicate: F) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate)
}
