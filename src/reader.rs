use crate::error::{FastqError, IoContext};
use crate::record::FastqRecord;
use crate::scanner::RecordScanner;
use crate::util::open_buffered;

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Source {
    Path(PathBuf),
    Reader,
}

/// Sync FASTQ reader (plain/.gz), streaming.
///
/// Accepts wrapped sequence and quality blocks and skips anything before the
/// first `@` line. Yields `MalformedStream` once if no header is ever found.
pub struct FastqReader {
    src: Source,
    rdr: Box<dyn BufRead + Send>,
    scanner: RecordScanner,
    line: String,
    line_num: u64,
    byte_pos: u64,
    done: bool,
}

impl FastqReader {
    /// Open from a file path. Auto-detect `.gz` by extension or magic bytes.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FastqError> {
        let path = path.as_ref();
        let rdr = open_buffered(path).map_err(|e| FastqError::io_err(e, IoContext::START))?;
        Ok(Self::new(Source::Path(path.to_path_buf()), rdr))
    }

    /// Wrap an arbitrary `BufRead` (stdin, etc.).
    pub fn from_bufread<R: BufRead + Send + 'static>(reader: R) -> Self {
        Self::new(Source::Reader, Box::new(reader))
    }

    fn new(src: Source, rdr: Box<dyn BufRead + Send>) -> Self {
        Self {
            src,
            rdr,
            scanner: RecordScanner::new(),
            line: String::with_capacity(256),
            line_num: 0,
            byte_pos: 0,
            done: false,
        }
    }

    pub fn source(&self) -> &Source {
        &self.src
    }

    /// Fetch the next record; `None` after end of stream or the first error.
    pub fn next_record(&mut self) -> Option<Result<FastqRecord, FastqError>> {
        if self.done {
            return None;
        }
        match self.read_one() {
            Ok(Some(rec)) => Some(Ok(rec)),
            Ok(None) => None,
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }

    fn read_line(&mut self) -> io::Result<usize> {
        self.line.clear();
        let n = self.rdr.read_line(&mut self.line)?;
        if n > 0 {
            self.line_num += 1;
            self.byte_pos += n as u64;
            if self.line.ends_with('\n') {
                self.line.pop();
            }
            if self.line.ends_with('\r') {
                self.line.pop();
            }
        }
        Ok(n)
    }

    fn read_one(&mut self) -> Result<Option<FastqRecord>, FastqError> {
        loop {
            let n = self
                .read_line()
                .map_err(|e| FastqError::io_err(e, self.ctx()))?;
            if n == 0 {
                self.done = true;
                if !self.scanner.found_header() {
                    return Err(FastqError::MalformedStream { ctx: self.ctx() });
                }
                return Ok(self.scanner.finish());
            }
            if let Some(rec) = self.scanner.push_line(&self.line) {
                return Ok(Some(rec));
            }
        }
    }

    #[inline]
    fn ctx(&self) -> IoContext {
        IoContext {
            byte_pos: self.byte_pos,
            line_num: self.line_num,
        }
    }
}

impl Iterator for FastqReader {
    type Item = Result<FastqRecord, FastqError>;
    fn next(&mut self) -> Option<Self::Item> {
        self.next_record()
    }
}
