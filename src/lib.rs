//! # strcomb - String Parser Combinators
//!
//! A small parser combinator engine for building recursive-descent parsers
//! over `&str` out of character matchers and combinators.
//!
//! The library is split in two tiers:
//!
//! - **Parsers** always return a [`ParseResult`]. Failure is a value with a
//!   status outside [`GOOD_STATUSES`], and combinators pass it along rather
//!   than raising it.
//! - **Terminal stages** ([`Attach`] and strict [`Sequencer`]s) turn a result
//!   into something else and are the only places that return a
//!   [`ParseError`].
//!
//! ```
//! use strcomb::{AttachExt, SeqExt, backend, char, many, satisfy, some, surround};
//!
//! let digits = some(satisfy(|c| c.is_ascii_digit()));
//! let list = surround(char('['))
//!     .seq(digits)
//!     .seq(many(surround(char(',')).seq(some(satisfy(|c| c.is_ascii_digit())))))
//!     .seq(surround(char(']')))
//!     .attach(backend(|input| {
//!         Ok(input
//!             .matched()
//!             .split(|c: char| !c.is_ascii_digit())
//!             .filter(|s| !s.is_empty())
//!             .count())
//!     }));
//!
//! assert_eq!(list.parse("[1, 22 ,333]"), Ok(3));
//! assert!(list.parse("[1,]").is_err());
//! ```

pub mod alt;
pub mod any;
pub mod attach;
pub mod backend;
pub mod boxed;
pub mod complete;
pub mod error;
pub mod fail;
pub mod lazy;
pub mod many;
pub mod parser;
pub mod result;
pub mod seq;
pub mod sequencer;
pub mod some;
pub mod status;
pub mod surround;
pub mod utf8;

pub use alt::{Alt, AltExt, alt};
pub use any::consume_any;
pub use attach::{Attach, AttachExt, Delivery};
pub use backend::{Backend, Input, backend, constant};
pub use boxed::{BoxedExt, BoxedParser};
pub use complete::complete;
pub use error::ParseError;
pub use fail::fail;
pub use lazy::lazy;
pub use many::many;
pub use parser::{Parser, parser_fn};
pub use result::ParseResult;
pub use seq::{Seq, SeqExt, seq};
pub use sequencer::{FnSequence, Handler, Sequence, SequenceExt, Sequencer, sequence_fn};
pub use some::some;
pub use status::{GOOD_STATUSES, InvalidStatusCode, Status, StatusSet};
pub use surround::{surround, surround_with};
pub use utf8::{char, literal, satisfy, spaces};
