#![cfg(feature = "async")]

use crate::error::{FastqError, IoContext};
use crate::reader::Source;
use crate::record::FastqRecord;
use crate::scanner::RecordScanner;
use crate::util::has_gz_extension;

use async_compression::tokio::bufread::GzipDecoder;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::io::{AsyncReadExt, AsyncSeekExt, SeekFrom};

/// Async FASTQ reader (plain/.gz), streaming. Same record rules as
/// [`FastqReader`](crate::FastqReader).
pub struct AsyncFastqReader {
    src: Source,
    rdr: Box<dyn AsyncBufRead + Unpin + Send>,
    scanner: RecordScanner,
    line: String,
    line_num: u64,
    byte_pos: u64,
    done: bool,
}

impl AsyncFastqReader {
    /// Open async from path; `.gz` auto-detect by extension or magic bytes.
    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FastqError> {
        let path = path.as_ref().to_path_buf();
        let mut f = File::open(&path)
            .await
            .map_err(|e| FastqError::io_err(e, IoContext::START))?;

        let is_gz = has_gz_extension(&path)
            || looks_like_gzip_async(&mut f).await.unwrap_or(false);
        log::debug!("opening {} (gzip: {is_gz}, async)", path.display());

        let rdr: Box<dyn AsyncBufRead + Unpin + Send> = if is_gz {
            let gz = GzipDecoder::new(BufReader::with_capacity(256 * 1024, f));
            Box::new(BufReader::with_capacity(256 * 1024, gz))
        } else {
            Box::new(BufReader::with_capacity(256 * 1024, f))
        };

        Ok(Self::new(Source::Path(path), rdr))
    }

    /// Wrap any async `AsyncBufRead`.
    pub fn from_async_bufread<R>(reader: R) -> Self
    where
        R: AsyncBufRead + Unpin + Send + 'static,
    {
        Self::new(Source::Reader, Box::new(reader))
    }

    fn new(src: Source, rdr: Box<dyn AsyncBufRead + Unpin + Send>) -> Self {
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

    /// Fetch next record (async).
    pub async fn next_record(&mut self) -> Option<Result<FastqRecord, FastqError>> {
        if self.done {
            return None;
        }
        match self.read_one().await {
            Ok(Some(rec)) => Some(Ok(rec)),
            Ok(None) => None,
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }

    async fn read_line(&mut self) -> io::Result<usize> {
        self.line.clear();
        let n = self.rdr.read_line(&mut self.line).await?;
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

    async fn read_one(&mut self) -> Result<Option<FastqRecord>, FastqError> {
        loop {
            let n = self
                .read_line()
                .await
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

async fn looks_like_gzip_async(f: &mut File) -> io::Result<bool> {
    let pos = f.stream_position().await?;
    let mut magic = [0u8; 2];
    let n = f.read(&mut magic).await?;
    f.seek(SeekFrom::Start(pos)).await?;
    Ok(n >= 2 && magic == [0x1F, 0x8B])
}
