//! Per-symbol quality re-encoding.
//!
//! Tables are built at compile time and indexed by symbol ordinal; a `None`
//! slot is a symbol outside the table's domain.

use crate::encoding::Conversion;
use crate::error::RecodeError;

/// Solexa symbols at or above this ordinal are already valid Phred+64.
pub const SOLEXA_PASSTHROUGH: u8 = b'J';

/// Phred+64 symbol for an unusable (`B`) score.
const B_SENTINEL: u8 = b'B';
const PHRED64_ZERO: u8 = b'@';

/// Immutable symbol → symbol mapping.
#[derive(Debug, Clone)]
pub struct ConversionTable {
    map: [Option<u8>; 256],
}

impl ConversionTable {
    /// Shift every symbol in `lo..=hi` by `delta`.
    const fn shifted(lo: u8, hi: u8, delta: i16) -> Self {
        let mut map = [None; 256];
        let mut q = lo;
        while q <= hi {
            map[q as usize] = Some((q as i16 + delta) as u8);
            q += 1;
        }
        Self { map }
    }

    const fn from_pairs(pairs: &[(u8, u8)]) -> Self {
        let mut map = [None; 256];
        let mut i = 0;
        while i < pairs.len() {
            map[pairs[i].0 as usize] = Some(pairs[i].1);
            i += 1;
        }
        Self { map }
    }

    #[inline]
    pub fn get(&self, symbol: u8) -> Option<u8> {
        self.map[symbol as usize]
    }

    /// Symbols with an entry, in ordinal order.
    pub fn domain(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|&q| self.map[q as usize].is_some())
    }
}

pub static PHRED33_TO_PHRED64: ConversionTable = ConversionTable::shifted(33, 73, 31);
pub static PHRED64_TO_PHRED33: ConversionTable = ConversionTable::shifted(64, 104, -31);

/// Solexa scores below Q10 collapse onto fewer Phred+64 symbols.
pub static SOLEXA_TO_PHRED64: ConversionTable = ConversionTable::from_pairs(&[
    (b';', b'A'),
    (b'<', b'A'),
    (b'=', b'B'),
    (b'>', b'B'),
    (b'?', b'C'),
    (b'@', b'C'),
    (b'A', b'D'),
    (b'B', b'D'),
    (b'C', b'E'),
    (b'D', b'E'),
    (b'E', b'F'),
    (b'F', b'G'),
    (b'G', b'H'),
    (b'H', b'I'),
    (b'I', b'J'),
    (b'J', b'J'),
]);

#[inline]
fn lookup(
    table: &ConversionTable,
    symbol: u8,
    position: usize,
    conversion: Conversion,
) -> Result<u8, RecodeError> {
    table.get(symbol).ok_or(RecodeError::UnsupportedSymbol {
        symbol,
        position,
        conversion,
    })
}

#[inline]
fn recode_symbol(symbol: u8, position: usize, conversion: Conversion) -> Result<u8, RecodeError> {
    let solexa = |q: u8| {
        if q < SOLEXA_PASSTHROUGH {
            lookup(&SOLEXA_TO_PHRED64, q, position, conversion)
        } else {
            Ok(q)
        }
    };
    let unset_b = |q: u8| if q == B_SENTINEL { PHRED64_ZERO } else { q };

    match conversion {
        Conversion::P33ToP64 => lookup(&PHRED33_TO_PHRED64, symbol, position, conversion),
        Conversion::P64ToP33 => lookup(&PHRED64_TO_PHRED33, symbol, position, conversion),
        Conversion::SolexaToP64 => solexa(symbol),
        Conversion::SolexaToP33 => {
            let p64 = solexa(symbol)?;
            lookup(&PHRED64_TO_PHRED33, p64, position, conversion)
        }
        Conversion::P64BToP64 => Ok(unset_b(symbol)),
        Conversion::P64BToP33 => lookup(
            &PHRED64_TO_PHRED33,
            unset_b(symbol),
            position,
            conversion,
        ),
    }
}

/// Re-encode `quality` into `out` (cleared first).
///
/// On error `out` holds the symbols converted before the offending one.
pub fn recode_into(
    quality: &[u8],
    conversion: Conversion,
    out: &mut Vec<u8>,
) -> Result<(), RecodeError> {
    out.clear();
    out.reserve(quality.len());
    for (position, &symbol) in quality.iter().enumerate() {
        out.push(recode_symbol(symbol, position, conversion)?);
    }
    Ok(())
}

/// Re-encode `quality`; the result has the same length.
pub fn recode(quality: &[u8], conversion: Conversion) -> Result<Vec<u8>, RecodeError> {
    let mut out = Vec::with_capacity(quality.len());
    recode_into(quality, conversion, &mut out)?;
    Ok(out)
}
