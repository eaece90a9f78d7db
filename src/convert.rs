//! Reader → recoder → writer driver.

use crate::encoding::Conversion;
use crate::error::FastqError;
use crate::recode::recode_into;
use crate::record::FastqRecord;
use crate::writer::FastqWriter;
use std::io::Write;

const PROGRESS_EVERY: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    pub records: u64,
    pub bases: u64,
}

/// Re-encode every record from `records` and write it to `writer`.
///
/// With `conversion == None` quality strings are copied unchanged. Stops at
/// the first error; records are numbered from 1 in error reports.
pub fn convert<I, W>(
    records: I,
    writer: &mut FastqWriter<W>,
    conversion: Option<Conversion>,
) -> Result<ConvertStats, FastqError>
where
    I: IntoIterator<Item = Result<FastqRecord, FastqError>>,
    W: Write,
{
    let mut stats = ConvertStats::default();
    let mut qual = Vec::with_capacity(256);

    match conversion {
        Some(c) => log::debug!("converting quality scores {c}"),
        None => log::debug!("encodings agree; copying quality scores"),
    }

    for rec in records {
        let rec = rec?;
        stats.records += 1;
        stats.bases += rec.seq.len() as u64;

        let written = match conversion {
            Some(c) => {
                recode_into(&rec.qual, c, &mut qual)
                    .map_err(|e| FastqError::recode_err(e, stats.records))?;
                writer.write_with_qual(&rec, &qual)
            }
            None => writer.write_record(&rec),
        };
        written.map_err(|source| FastqError::Write {
            source,
            record: stats.records,
        })?;

        if stats.records % PROGRESS_EVERY == 0 {
            log::debug!("{} records processed", stats.records);
        }
    }

    writer.flush().map_err(|source| FastqError::Write {
        source,
        record: stats.records,
    })?;
    log::info!(
        "converted {} records ({} bases)",
        stats.records,
        stats.bases
    );
    Ok(stats)
}
