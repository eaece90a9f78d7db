//! Streaming FASTQ quality-score re-encoding.
//!
//! - Phred+33, Phred+64, Phred+64 with `B` sentinel, Solexa input;
//!   Phred+33 or Phred+64 output.
//! - Plain and `.gz` input (auto-detect), record-by-record (no full-file buffering).
//! - Wrapped (multi-line) sequence and quality blocks; noise before the first
//!   record is skipped.
//! - Fails fast: header-less input, out-of-range quality symbols and
//!   unsupported encoding pairs are errors.
//! - Optional `mmap` for plain files; `zlib` feature for the system zlib backend.
//! - Optional async reader behind `async` feature.

pub mod convert;
pub mod encoding;
pub mod error;
pub mod reader;
pub mod recode;
pub mod record;
mod scanner;
mod util;
pub mod writer;

#[cfg(feature = "async")]
pub mod async_reader;

pub use crate::convert::{ConvertStats, convert};
pub use crate::encoding::{Conversion, Encoding};
pub use crate::error::{FastqError, IoContext, RecodeError};
pub use crate::reader::{FastqReader, Source};
pub use crate::recode::{ConversionTable, recode, recode_into};
pub use crate::record::FastqRecord;
pub use crate::writer::FastqWriter;

#[cfg(feature = "async")]
pub use crate::async_reader::AsyncFastqReader;
