//! Marker-delimited block patching for proxyctl.
//!
//! A managed block starts at a unique marker string (by convention a comment
//! line) and runs to the first blank line after it, or to end of file:
//!
//! ```text
//! unrelated user content
//!
//! # proxyctl managed
//! proxy=http://127.0.0.1:7890
//! https-proxy=http://127.0.0.1:7890
//!
//! more user content
//! ```
//!
//! The crate is split in two layers:
//!
//! - [`parser`] and [`writer`] work on in-memory content and never touch disk.
//! - [`patcher`] applies them to files with a `.bak` backup taken before every
//!   mutation and a best-effort restore if the write fails.
//!
//! The blank-line terminator is literal (`"\n\n"`): a block whose own text
//! contains a blank line is truncated at it. Only the first occurrence of a
//! marker is ever considered.

pub mod error;
pub mod parser;
pub mod patcher;
pub mod writer;

pub use error::{Error, Result};
pub use parser::{extract_block, find_span, has_block};
pub use patcher::{Extraction, PatchReport, Removal, Snapshot, extract, remove, upsert};
pub use writer::{remove_block, upsert_block};
