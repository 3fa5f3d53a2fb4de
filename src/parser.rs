use crate::result::ParseResult;

/// Core parser trait for parser combinators
///
/// A parser is a pure function from input text to a [`ParseResult`]. It never
/// returns an error: failure is a result whose status is outside the good set.
/// A failing result must not advance past the input it was given.
pub trait Parser<'code> {
    fn parse(&self, input: &'code str) -> ParseResult<'code>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    fn parse(&self, input: &'code str) -> ParseResult<'code> {
        (**self).parse(input)
    }
}

/// Parser backed by a plain function or closure
#[derive(Clone, Copy)]
pub struct FnParser<F> {
    f: F,
}

impl<'code, F> Parser<'code> for FnParser<F>
where
    F: Fn(&'code str) -> ParseResult<'code>,
{
    fn parse(&self, input: &'code str) -> ParseResult<'code> {
        (self.f)(input)
    }
}

/// Turn a closure into a parser
///
/// ```
/// use strcomb::{ParseResult, Parser, parser_fn};
///
/// let digit_pair = parser_fn(|input: &str| match input.get(..2) {
///     Some(head) if head.bytes().all(|b| b.is_ascii_digit()) => {
///         ParseResult::ok(head, &input[2..])
///     }
///     _ => strcomb::fail().parse(input),
/// });
/// assert_eq!(digit_pair.parse("42!").matched(), "42");
/// ```
pub fn parser_fn<F>(f: F) -> FnParser<F>
where
    F: for<'code> Fn(&'code str) -> ParseResult<'code>,
{
    FnParser { f }
}
