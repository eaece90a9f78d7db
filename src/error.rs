use crate::encoding::{Conversion, Encoding};
use std::io;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoContext {
    pub byte_pos: u64,
    pub line_num: u64,
}

impl IoContext {
    pub const START: IoContext = IoContext {
        byte_pos: 0,
        line_num: 0,
    };
}

/// Failure of the pure recoder; carries no record index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecodeError {
    #[error(
        "symbol {:?} (0x{symbol:02X}) at position {position} has no {conversion} mapping",
        symbol_char(.symbol)
    )]
    UnsupportedSymbol {
        symbol: u8,
        position: usize,
        conversion: Conversion,
    },
}

#[derive(Debug, Error)]
pub enum FastqError {
    #[error("I/O error at {ctx:?}: {source}")]
    Io {
        #[source]
        source: io::Error,
        ctx: IoContext,
    },
    #[error("no '@' record header found before end of stream ({ctx:?})")]
    MalformedStream { ctx: IoContext },
    #[error(
        "record {record}: quality symbol {:?} (0x{symbol:02X}) at position {position} has no {conversion} mapping",
        symbol_char(.symbol)
    )]
    UnsupportedSymbol {
        record: u64,
        symbol: u8,
        position: usize,
        conversion: Conversion,
    },
    #[error("no conversion from {input} to {output}")]
    UnsupportedCombination { input: Encoding, output: Encoding },
    #[error("write error at record {record}: {source}")]
    Write {
        #[source]
        source: io::Error,
        record: u64,
    },
}

fn symbol_char(symbol: &u8) -> char {
    char::from(*symbol)
}

impl FastqError {
    pub(crate) fn io_err(source: io::Error, ctx: IoContext) -> Self {
        Self::Io { source, ctx }
    }

    pub(crate) fn recode_err(source: RecodeError, record: u64) -> Self {
        let RecodeError::UnsupportedSymbol {
            symbol,
            position,
            conversion,
        } = source;
        Self::UnsupportedSymbol {
            record,
            symbol,
            position,
            conversion,
        }
    }
}
