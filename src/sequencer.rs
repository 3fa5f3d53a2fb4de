//! Sequencers run a list of parsers in order and keep their results apart.
//!
//! Where [`Seq`](crate::seq::Seq) joins everything into one matched string, a
//! [`Sequencer`] yields one [`ParseResult`] per kept step. That lets a grammar
//! rule with several fields (a key, a separator, a value) hand each field back
//! on its own.

use crate::boxed::BoxedParser;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;

/// A parser to run inside a [`Sequencer`], and whether its result is kept
#[derive(Debug, Clone)]
pub struct Handler<'p> {
    parser: BoxedParser<'p>,
    keep: bool,
}

impl<'p> Handler<'p> {
    /// A handler whose result appears in the output
    pub fn new<P>(parser: P) -> Self
    where
        P: for<'code> Parser<'code> + Send + Sync + 'p,
    {
        Self::with_keep(parser, true)
    }

    /// A handler that must match but whose result is dropped
    pub fn skip<P>(parser: P) -> Self
    where
        P: for<'code> Parser<'code> + Send + Sync + 'p,
    {
        Self::with_keep(parser, false)
    }

    pub fn with_keep<P>(parser: P, keep: bool) -> Self
    where
        P: for<'code> Parser<'code> + Send + Sync + 'p,
    {
        Handler {
            parser: BoxedParser::new(parser),
            keep,
        }
    }

    pub fn keep(&self) -> bool {
        self.keep
    }
}

/// Anything that turns input into a list of separate results
///
/// The last element is always a sentinel `Ok` result with empty `matched`
/// whose `remaining` is the input left over.
pub trait Sequence<'code> {
    fn parse(&self, input: &'code str) -> Result<Vec<ParseResult<'code>>, ParseError>;
}

/// Runs handlers left to right, each on the input the previous one left
///
/// Strict sequencers (the default) fail with a [`ParseError`] as soon as a
/// handler fails or the input runs out with handlers pending. Lenient ones
/// carry on from a failing result's `remaining` and stop quietly at EOF.
/// Input left over after the last handler is not an error.
///
/// ```
/// use strcomb::{Handler, ParseResult, Sequence, Sequencer, char};
///
/// let ab = Sequencer::new(vec![Handler::new(char('a')), Handler::skip(char('b'))]);
/// assert_eq!(
///     ab.parse("ab").unwrap(),
///     vec![ParseResult::ok("a", "b"), ParseResult::ok("", "")]
/// );
/// assert!(ab.parse("a").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Sequencer<'p> {
    handlers: Vec<Handler<'p>>,
    strict: bool,
}

impl<'p> Sequencer<'p> {
    /// A strict sequencer over `handlers`
    pub fn new(handlers: Vec<Handler<'p>>) -> Self {
        Sequencer {
            handlers,
            strict: true,
        }
    }

    pub fn lenient(handlers: Vec<Handler<'p>>) -> Self {
        Self::new(handlers).strict(false)
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn handlers(&self) -> &[Handler<'p>] {
        &self.handlers
    }
}

impl<'code> Sequence<'code> for Sequencer<'_> {
    fn parse(&self, input: &'code str) -> Result<Vec<ParseResult<'code>>, ParseError> {
        let mut results = Vec::new();
        let mut handlers = self.handlers.iter();
        let mut remaining = input;

        loop {
            if remaining.is_empty() {
                let pending = handlers.len();
                if self.strict && pending > 0 {
                    log::trace!("sequencer hit EOF with {} handler(s) pending", pending);
                    return Err(ParseError::PrematureEof { pending });
                }
                results.push(ParseResult::ok(remaining, remaining));
                break;
            }
            let Some(handler) = handlers.next() else {
                results.push(ParseResult::ok(&remaining[..0], remaining));
                break;
            };

            let result = handler.parser.parse(remaining);
            if !result.is_good() && self.strict {
                log::trace!("sequencer step rejected input: {}", result);
                return Err(ParseError::rejected(&result));
            }
            remaining = result.remaining();
            if handler.keep {
                results.push(result);
            }
        }

        Ok(results)
    }
}

/// Sequence backed by a plain function or closure
#[derive(Clone, Copy)]
pub struct FnSequence<F> {
    f: F,
}

impl<'code, F> Sequence<'code> for FnSequence<F>
where
    F: Fn(&'code str) -> Result<Vec<ParseResult<'code>>, ParseError>,
{
    fn parse(&self, input: &'code str) -> Result<Vec<ParseResult<'code>>, ParseError> {
        (self.f)(input)
    }
}

/// Turn a closure into a sequence
///
/// The closure must follow the same contract as [`Sequencer`] and end its
/// output with a sentinel result.
///
/// ```
/// use strcomb::{ParseResult, Sequence, sequence_fn};
///
/// let words = sequence_fn(|input: &str| {
///     let mut results: Vec<ParseResult<'_>> = input
///         .split_inclusive(' ')
///         .map(|word| ParseResult::ok(word, ""))
///         .collect();
///     results.push(ParseResult::ok("", ""));
///     Ok(results)
/// });
/// assert_eq!(words.parse("a b c").unwrap().len(), 4);
/// ```
pub fn sequence_fn<F>(f: F) -> FnSequence<F>
where
    F: for<'code> Fn(&'code str) -> Result<Vec<ParseResult<'code>>, ParseError>,
{
    FnSequence { f }
}

/// Two sequences run back to back
///
/// The first sequence's sentinel is dropped and the second continues from
/// the sentinel's `remaining`.
#[derive(Debug, Clone, Copy)]
pub struct Chain<S1, S2> {
    first: S1,
    second: S2,
}

impl<'code, S1, S2> Sequence<'code> for Chain<S1, S2>
where
    S1: Sequence<'code>,
    S2: Sequence<'code>,
{
    fn parse(&self, input: &'code str) -> Result<Vec<ParseResult<'code>>, ParseError> {
        let mut results = self.first.parse(input)?;
        let remaining = results.pop().map_or(input, |sentinel| sentinel.remaining());
        results.extend(self.second.parse(remaining)?);
        Ok(results)
    }
}

/// Tries the first sequence and, if it raises an error, the second one on the
/// same input
#[derive(Debug, Clone, Copy)]
pub struct Fallback<S1, S2> {
    first: S1,
    second: S2,
}

impl<'code, S1, S2> Sequence<'code> for Fallback<S1, S2>
where
    S1: Sequence<'code>,
    S2: Sequence<'code>,
{
    fn parse(&self, input: &'code str) -> Result<Vec<ParseResult<'code>>, ParseError> {
        self.first.parse(input).or_else(|err| {
            log::debug!("first sequence failed ({}), trying the alternative", err);
            self.second.parse(input)
        })
    }
}

/// Extension trait to add .seq() and .alt() to sequences
pub trait SequenceExt<'code>: Sequence<'code> + Sized {
    fn seq<S>(self, other: S) -> Chain<Self, S>
    where
        S: Sequence<'code>,
    {
        Chain {
            first: self,
            second: other,
        }
    }

    fn alt<S>(self, other: S) -> Fallback<Self, S>
    where
        S: Sequence<'code>,
    {
        Fallback {
            first: self,
            second: other,
        }
    }
}

/// Implement SequenceExt for all sequences
impl<'code, S> SequenceExt<'code> for S where S: Sequence<'code> {}
