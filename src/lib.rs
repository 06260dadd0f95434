//! Colorful FASTQ viewer for the terminal.
//!
//! - Plain and `.gz` input (extension or magic-byte detection), streamed
//!   record by record.
//! - Header fields colored by position, bases by symbol.
//! - Phred+33 quality rendered as a red → green block gradient.
//! - Optional fixed-width wrapping of sequence and quality lines.

pub mod error;
pub mod header;
pub mod options;
pub mod palette;
pub mod quality;
pub mod reader;
pub mod record;
pub mod render;
mod util;

pub use crate::error::{FastqError, IoContext};
pub use crate::header::{colorize_fields, colorize_header, colorize_separator, strip_ansi};
pub use crate::options::{DEFAULT_RECORD_LIMIT, RenderOptions};
pub use crate::quality::{phred_score, quality_color};
pub use crate::reader::FastqReader;
pub use crate::record::FastqRecord;
pub use crate::render::{Renderer, chunks, render_file};
