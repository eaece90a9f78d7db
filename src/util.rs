use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

const BUF_CAPACITY: usize = 256 * 1024;

pub fn looks_like_gzip<R: Read + Seek>(mut r: R) -> io::Result<bool> {
    let mut magic = [0u8; 2];
    let pos = r.stream_position()?;
    let n = r.read(&mut magic)?;
    r.seek(SeekFrom::Start(pos))?;
    Ok(n >= 2 && magic == [0x1F, 0x8B])
}

pub fn has_gz_extension(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("gz")
}

/// Open `path` for line reading, decompressing gzip (by extension or magic).
pub fn open_buffered(path: &Path) -> io::Result<Box<dyn BufRead + Send>> {
    let f = File::open(path)?;
    let is_gz = has_gz_extension(path) || looks_like_gzip(&f).unwrap_or(false);
    log::debug!("opening {} (gzip: {is_gz})", path.display());

    if is_gz {
        return open_gzip(f);
    }

    #[cfg(feature = "mmap")]
    let rdr: Box<dyn BufRead + Send> = {
        use memmap2::Mmap;
        use std::io::Cursor;
        // Own the Mmap inside Cursor to avoid self-ref problems
        let mmap = unsafe { Mmap::map(&f) }?;
        Box::new(BufReader::with_capacity(2 * BUF_CAPACITY, Cursor::new(mmap)))
    };
    #[cfg(not(feature = "mmap"))]
    let rdr: Box<dyn BufRead + Send> = Box::new(BufReader::with_capacity(BUF_CAPACITY, f));

    Ok(rdr)
}

#[cfg(feature = "gzip")]
fn open_gzip(f: File) -> io::Result<Box<dyn BufRead + Send>> {
    let dec = flate2::read::MultiGzDecoder::new(f);
    Ok(Box::new(BufReader::with_capacity(BUF_CAPACITY, dec)))
}

#[cfg(not(feature = "gzip"))]
fn open_gzip(_: File) -> io::Result<Box<dyn BufRead + Send>> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "gzip input requires the `gzip` feature",
    ))
}
