//! Scanner for pad definition files: `[section]` headers followed by
//! `key = value` lines, yielded as a stream of entries with line numbers.

mod scan;

pub use scan::{Entry, Scanner, SyntaxError, SyntaxErrorKind};
