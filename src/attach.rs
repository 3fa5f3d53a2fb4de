use crate::backend::{Backend, Input};
use crate::error::ParseError;
use crate::parser::Parser;

/// Selects what an attached backend receives
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Delivery {
    /// The matched text only
    #[default]
    Matched,
    /// The whole `ParseResult`
    FullResult,
}

/// A parser with a backend attached: the terminal stage of a chain
///
/// This is the only place where an in-band parse failure becomes an error.
#[derive(Debug, Clone, Copy)]
pub struct Attach<P, B> {
    parser: P,
    backend: B,
    delivery: Delivery,
}

impl<P, B> Attach<P, B> {
    pub fn new(parser: P, backend: B, delivery: Delivery) -> Self {
        Attach {
            parser,
            backend,
            delivery,
        }
    }

    /// Run the parser and hand a good result to the backend.
    ///
    /// A result outside the good set becomes [`ParseError::Rejected`] with the
    /// result's rendering as diagnostic. Errors from the backend are returned
    /// unchanged.
    pub fn parse<'code>(&self, input: &'code str) -> Result<B::Output, ParseError>
    where
        P: Parser<'code>,
        B: Backend<'code>,
    {
        let result = self.parser.parse(input);
        if !result.is_good() {
            log::trace!("attached parser rejected input: {}", result);
            return Err(ParseError::rejected(&result));
        }
        let delivered = match self.delivery {
            Delivery::Matched => Input::Matched(result.into_matched()),
            Delivery::FullResult => Input::Full(result),
        };
        self.backend.apply(delivered)
    }
}

/// Extension trait to add .attach() method support for parsers
pub trait AttachExt<'code>: Parser<'code> + Sized {
    /// Attach a backend that receives the matched text
    fn attach<B>(self, backend: B) -> Attach<Self, B>
    where
        B: Backend<'code>,
    {
        Attach::new(self, backend, Delivery::Matched)
    }

    /// Attach a backend that receives the whole `ParseResult`
    fn attach_full<B>(self, backend: B) -> Attach<Self, B>
    where
        B: Backend<'code>,
    {
        Attach::new(self, backend, Delivery::FullResult)
    }

    fn attach_with<B>(self, backend: B, delivery: Delivery) -> Attach<Self, B>
    where
        B: Backend<'code>,
    {
        Attach::new(self, backend, delivery)
    }
}

/// Implement AttachExt for all parsers
impl<'code, P> AttachExt<'code> for P where P: Parser<'code> {}
