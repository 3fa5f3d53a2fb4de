use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that requires the wrapped parser to consume all input
///
/// Leftover input turns a good result into `ExpectedEof`, with the leftover
/// text as `matched` and the original input as `remaining`.
#[derive(Debug, Clone, Copy)]
pub struct Complete<P> {
    parser: P,
}

impl<P> Complete<P> {
    pub fn new(parser: P) -> Self {
        Complete { parser }
    }
}

impl<'code, P> Parser<'code> for Complete<P>
where
    P: Parser<'code>,
{
    fn parse(&self, input: &'code str) -> ParseResult<'code> {
        let result = self.parser.parse(input);
        if result.is_good() && !result.remaining().is_empty() {
            ParseResult::expected_eof(result.remaining(), input)
        } else {
            result
        }
    }
}

pub fn complete<'code, P>(parser: P) -> Complete<P>
where
    P: Parser<'code>,
{
    Complete::new(parser)
}
