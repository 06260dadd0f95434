use crate::error::{FastqError, IoContext};
use crate::record::FastqRecord;
use crate::util::{has_gz_suffix, looks_like_gzip, open_file};

#[cfg(feature = "gzip")]
use flate2::read::MultiGzDecoder;
use std::io::{self, BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::Path;

/// Streaming 4-line FASTQ reader over plain or gzip input.
///
/// The reader owns its input handle; dropping it (after exhaustion, an early
/// `break`, or unwinding) closes the file.
pub struct FastqReader {
    rdr: Box<dyn BufRead + Send>,
    limit: Option<usize>,
    yielded: usize,
    line_num: u64,
    byte_pos: u64,
    done: bool,
    buf: Vec<u8>,
}

impl FastqReader {
    /// Open from a file path, yielding at most `limit` records (`None` for all).
    /// Gzip is detected by a `.gz` extension or the gzip magic bytes.
    ///
    /// Fails before any record is read if the path cannot be opened.
    pub fn from_path<P: AsRef<Path>>(path: P, limit: Option<usize>) -> Result<Self, FastqError> {
        let path = path.as_ref();
        let f = open_file(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                FastqError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                FastqError::io_err(e, IoContext::default())
            }
        })?;

        let is_gz = has_gz_suffix(path) || looks_like_gzip(&f).unwrap_or(false);

        let rdr: Box<dyn BufRead + Send> = if is_gz {
            #[cfg(feature = "gzip")]
            {
                log::debug!("reading {} as gzip", path.display());
                let dec = MultiGzDecoder::new(f);
                Box::new(BufReader::with_capacity(256 * 1024, dec))
            }
            #[cfg(not(feature = "gzip"))]
            {
                return Err(FastqError::io_err(
                    io::Error::new(
                        io::ErrorKind::Unsupported,
                        "gzip input requires the `gzip` feature",
                    ),
                    IoContext::default(),
                ));
            }
        } else {
            #[cfg(feature = "mmap")]
            {
                use memmap2::Mmap;
                use std::io::Cursor;
                // Own the Mmap inside Cursor to avoid self-ref problems
                let mmap = unsafe { Mmap::map(&f) }
                    .map_err(|e| FastqError::io_err(e, IoContext::default()))?;
                Box::new(BufReader::with_capacity(512 * 1024, Cursor::new(mmap)))
            }
            #[cfg(not(feature = "mmap"))]
            {
                Box::new(BufReader::with_capacity(256 * 1024, f))
            }
        };

        Ok(Self::with_reader(rdr, limit))
    }

    /// Wrap an arbitrary `BufRead` (stdin, in-memory data, etc.).
    pub fn from_bufread<R: BufRead + Send + 'static>(reader: R, limit: Option<usize>) -> Self {
        Self::with_reader(Box::new(reader), limit)
    }

    fn with_reader(rdr: Box<dyn BufRead + Send>, limit: Option<usize>) -> Self {
        Self {
            rdr,
            limit,
            yielded: 0,
            line_num: 0,
            byte_pos: 0,
            done: false,
            buf: Vec::with_capacity(256),
        }
    }

    /// Number of records handed out so far.
    pub fn records_read(&self) -> usize {
        self.yielded
    }

    /// Reads one line, strips `\n` / `\r\n`. Returns an empty string at EOF.
    /// Each byte becomes one `char` (Latin-1), so quality positions stay byte positions.
    fn read_line(&mut self) -> io::Result<String> {
        self.buf.clear();
        let n = self.rdr.read_until(b'\n', &mut self.buf)?;
        if n > 0 {
            self.line_num += 1;
            self.byte_pos += n as u64;
            if self.buf.ends_with(b"\n") {
                self.buf.pop();
            }
            if self.buf.ends_with(b"\r") {
                self.buf.pop();
            }
        }
        Ok(self.buf.iter().map(|&b| char::from(b)).collect())
    }

    fn read_one(&mut self) -> Result<Option<FastqRecord>, FastqError> {
        if self.limit.is_some_and(|n| self.yielded >= n) {
            return Ok(None);
        }

        let header = self
            .read_line()
            .map_err(|e| FastqError::io_err(e, self.ctx()))?;
        if header.is_empty() {
            return Ok(None);
        }

        let mut lines = [String::new(), String::new(), String::new()];
        for slot in lines.iter_mut() {
            *slot = self
                .read_line()
                .map_err(|e| FastqError::io_err(e, self.ctx()))?;
        }
        if lines.iter().any(String::is_empty) {
            log::debug!("dropping truncated record at {}", self.ctx());
            return Ok(None);
        }

        let [seq, plus, qual] = lines;
        self.yielded += 1;
        Ok(Some(FastqRecord {
            header,
            seq,
            plus,
            qual,
        }))
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
        if self.done {
            return None;
        }
        match self.read_one() {
            Ok(Some(rec)) => Some(Ok(rec)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for FastqReader {}
