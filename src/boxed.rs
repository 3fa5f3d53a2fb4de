use crate::parser::Parser;
use crate::result::ParseResult;
use std::fmt;
use std::sync::Arc;

type ParserObject<'p> = dyn for<'code> Parser<'code> + Send + Sync + 'p;

/// Type-erased parser for storing parsers of different types together and for
/// recursive grammars. Cloning shares the underlying parser, and boxed parsers
/// can be shared between threads.
pub struct BoxedParser<'p> {
    parser: Arc<ParserObject<'p>>,
}

impl Clone for BoxedParser<'_> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Arc::clone(&self.parser),
        }
    }
}

impl fmt::Debug for BoxedParser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxedParser")
    }
}

impl<'p> BoxedParser<'p> {
    pub fn new<P>(parser: P) -> Self
    where
        P: for<'code> Parser<'code> + Send + Sync + 'p,
    {
        BoxedParser {
            parser: Arc::new(parser),
        }
    }
}

impl<'code> Parser<'code> for BoxedParser<'_> {
    fn parse(&self, input: &'code str) -> ParseResult<'code> {
        self.parser.parse(input)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'p>: Sized {
    fn boxed(self) -> BoxedParser<'p>;
}

impl<'p, P> BoxedExt<'p> for P
where
    P: for<'code> Parser<'code> + Send + Sync + 'p,
{
    fn boxed(self) -> BoxedParser<'p> {
        BoxedParser::new(self)
    }
}
