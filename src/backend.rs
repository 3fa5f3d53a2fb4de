//! Backends turn a successful parse into a value of any type.
//!
//! A backend is always the last stage of a chain: it sees what was matched
//! but never the remaining input, and it reports failure as a [`ParseError`]
//! rather than a [`ParseResult`].

use crate::error::ParseError;
use crate::result::ParseResult;
use std::borrow::Cow;

/// What an attached backend receives from its parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'code> {
    /// Only the matched text
    Matched(Cow<'code, str>),
    /// The whole successful result
    Full(ParseResult<'code>),
}

impl<'code> Input<'code> {
    /// The matched text, whichever form was delivered
    pub fn matched(&self) -> &str {
        match self {
            Input::Matched(text) => text,
            Input::Full(result) => result.matched(),
        }
    }

    pub fn into_matched(self) -> Cow<'code, str> {
        match self {
            Input::Matched(text) => text,
            Input::Full(result) => result.into_matched(),
        }
    }

    pub fn result(&self) -> Option<&ParseResult<'code>> {
        match self {
            Input::Matched(_) => None,
            Input::Full(result) => Some(result),
        }
    }
}

/// Terminal transformation from a successful parse to an output value
pub trait Backend<'code> {
    type Output;

    fn apply(&self, input: Input<'code>) -> Result<Self::Output, ParseError>;
}

/// Backend backed by a closure
#[derive(Clone, Copy)]
pub struct FnBackend<F> {
    f: F,
}

impl<'code, F, T> Backend<'code> for FnBackend<F>
where
    F: Fn(Input<'code>) -> Result<T, ParseError>,
{
    type Output = T;

    fn apply(&self, input: Input<'code>) -> Result<Self::Output, ParseError> {
        (self.f)(input)
    }
}

/// Turn a closure into a backend
///
/// ```
/// use strcomb::{AttachExt, ParseError, backend, satisfy, some};
///
/// let number = some(satisfy(|c| c.is_ascii_digit())).attach(backend(|input| {
///     input
///         .matched()
///         .parse::<u32>()
///         .map_err(|e| ParseError::backend(e.to_string()))
/// }));
/// assert_eq!(number.parse("42"), Ok(42));
/// ```
pub fn backend<'code, F, T>(f: F) -> FnBackend<F>
where
    F: Fn(Input<'code>) -> Result<T, ParseError>,
{
    FnBackend { f }
}

/// Backend that ignores its input and always yields the same value
#[derive(Debug, Clone, Copy)]
pub struct Const<T>(T);

impl<'code, T> Backend<'code> for Const<T>
where
    T: Clone,
{
    type Output = T;

    fn apply(&self, _input: Input<'code>) -> Result<Self::Output, ParseError> {
        Ok(self.0.clone())
    }
}

/// `char('1').attach(constant(1))` parses `"1"` as the integer `1`.
pub fn constant<T: Clone>(value: T) -> Const<T> {
    Const(value)
}
