use crate::parser::Parser;
use crate::result::{ParseResult, concat};
use std::borrow::Cow;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Always succeeds. Runs as a loop, so long inputs do not grow the stack. A
/// success that consumes nothing ends the loop, otherwise a parser matching
/// the empty string would repeat forever.
#[derive(Debug, Clone, Copy)]
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    fn parse(&self, input: &'code str) -> ParseResult<'code> {
        let (matched, remaining) = repeat(&self.parser, input, Cow::Borrowed(&input[..0]), input);
        ParseResult::ok(matched, remaining)
    }
}

/// Apply `parser` from `remaining` until it fails, appending every match to
/// `matched`. Shared by `many` and `some`.
pub(crate) fn repeat<'code, P>(
    parser: &P,
    input: &'code str,
    mut matched: Cow<'code, str>,
    mut remaining: &'code str,
) -> (Cow<'code, str>, &'code str)
where
    P: Parser<'code>,
{
    loop {
        let result = parser.parse(remaining);
        if !result.is_good() {
            break;
        }
        let (next, rest, _) = result.into_parts();
        let consumed = rest.len() < remaining.len();
        matched = concat(input, matched, next);
        remaining = rest;
        if !consumed {
            log::trace!("repetition stopped on a zero-width match at {:?}", remaining);
            break;
        }
    }
    (matched, remaining)
}

/// Convenience function to create a Many parser
///
/// `many(char('_'))` on `"___x"` matches `"___"` and leaves `"x"`.
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}
