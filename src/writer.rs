use crate::record::FastqRecord;
use std::io::{self, BufWriter, Write};

/// Writes records in canonical four-line form, restoring the `@` and `+`
/// sentinels.
pub struct FastqWriter<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> FastqWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: BufWriter::with_capacity(256 * 1024, out),
        }
    }

    pub fn write_record(&mut self, rec: &FastqRecord) -> io::Result<()> {
        self.write_with_qual(rec, &rec.qual)
    }

    /// Write `rec` with `qual` in place of its own quality string.
    pub fn write_with_qual(&mut self, rec: &FastqRecord, qual: &[u8]) -> io::Result<()> {
        let qual_header = if rec.qual_header.is_empty() {
            "+"
        } else {
            rec.qual_header.as_str()
        };
        self.out.write_all(b"@")?;
        self.out.write_all(rec.header.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.write_all(&rec.seq)?;
        self.out.write_all(b"\n")?;
        self.out.write_all(qual_header.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.write_all(qual)?;
        self.out.write_all(b"\n")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> io::Result<W> {
        self.out.into_inner().map_err(|e| e.into_error())
    }
}
