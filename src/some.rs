use crate::many::repeat;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// If the first attempt fails its result is returned unchanged, so the caller
/// sees the original diagnostic. Later failures just end the repetition.
#[derive(Debug, Clone, Copy)]
pub struct SomeParser<P> {
    parser: P,
}

impl<P> SomeParser<P> {
    pub fn new(parser: P) -> Self {
        SomeParser { parser }
    }
}

impl<'code, P> Parser<'code> for SomeParser<P>
where
    P: Parser<'code>,
{
    fn parse(&self, input: &'code str) -> ParseResult<'code> {
        // First parse must succeed
        let first = self.parser.parse(input);
        if !first.is_good() {
            return first;
        }
        let (matched, remaining, _) = first.into_parts();
        if remaining.len() == input.len() {
            return ParseResult::ok(matched, remaining);
        }
        let (matched, remaining) = repeat(&self.parser, input, matched, remaining);
        ParseResult::ok(matched, remaining)
    }
}

/// Convenience function to create a SomeParser
pub fn some<'code, P>(parser: P) -> SomeParser<P>
where
    P: Parser<'code>,
{
    SomeParser::new(parser)
}
