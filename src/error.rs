use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Position in the (decompressed) input at which an error was observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IoContext {
    pub byte_pos: u64,
    pub line_num: u64,
}

impl fmt::Display for IoContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, byte {}", self.line_num, self.byte_pos)
    }
}

#[derive(Debug, Error)]
pub enum FastqError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("I/O error at {ctx}: {source}")]
    Io {
        #[source]
        source: io::Error,
        ctx: IoContext,
    },
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl FastqError {
    pub(crate) fn io_err(source: io::Error, ctx: IoContext) -> Self {
        Self::Io { source, ctx }
    }

    /// True when the output side went away (e.g. `fqview x.fq | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
