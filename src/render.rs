use crate::error::FastqError;
use crate::header::{colorize_header, colorize_separator};
use crate::options::RenderOptions;
use crate::palette::{RESET, base_colour, bold, dim};
use crate::quality::{phred_score, quality_color};
use crate::reader::FastqReader;
use crate::record::FastqRecord;

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;

const INDENT: &str = "  ";
const RULE_WIDTH: usize = 60;
const BLOCK: char = '█';
const LEGEND_SCORES: [i32; 9] = [0, 5, 10, 15, 20, 25, 30, 35, 40];

/// Split `s` into consecutive runs of `width` characters; the last may be shorter.
/// A width of 0 means no wrapping.
pub fn chunks(s: &str, width: usize) -> Vec<&str> {
    if width == 0 {
        return vec![s];
    }
    let mut out = Vec::with_capacity(s.len() / width + 1);
    let mut start = 0;
    for (n, (i, _)) in s.char_indices().enumerate() {
        if n > 0 && n % width == 0 {
            out.push(&s[start..i]);
            start = i;
        }
    }
    if start < s.len() {
        out.push(&s[start..]);
    }
    out
}

/// Color each base individually. Bases outside `ACGTN` get a plain reset.
pub fn color_sequence(seq: &str) -> String {
    let mut out = String::with_capacity(seq.len() * 14);
    for base in seq.chars() {
        let _ = match base_colour(base) {
            Some(c) => write!(out, "{}{}{}", c.prefix(), base, c.suffix()),
            None => write!(out, "{RESET}{base}{RESET}"),
        };
    }
    out
}

/// One colored block per quality character.
pub fn quality_blocks(qual: &str) -> String {
    let mut out = String::with_capacity(qual.len() * 16);
    for q in qual.chars() {
        let c = quality_color(phred_score(q));
        let _ = write!(out, "{}{}{}", c.prefix(), BLOCK, c.suffix());
    }
    out
}

/// Writes the colored view of FASTQ records to `W`.
pub struct Renderer<W: Write> {
    out: W,
    opts: RenderOptions,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, opts: RenderOptions) -> Self {
        Self { out, opts }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Sample swatches for the quality gradient.
    pub fn legend(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", bold().paint("Quality Score Legend:"))?;
        write!(self.out, "Phred: ")?;
        for score in LEGEND_SCORES {
            write!(self.out, "{}{:<2}", quality_color(score).paint("██"), score)?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "       {:<12}{:<12}{:<12}", "Low", "Medium", "High")?;
        writeln!(self.out)
    }

    pub fn banner(&mut self, title: &str) -> io::Result<()> {
        let rule = "─".repeat(RULE_WIDTH);
        writeln!(self.out, "{}", bold().paint(rule.as_str()))?;
        writeln!(self.out, "{}", bold().paint(format!("FASTQ Viewer: {title}")))?;
        writeln!(self.out, "{}", bold().paint(rule.as_str()))?;
        writeln!(self.out)
    }

    /// Render one record; `index` is zero-based.
    pub fn record(&mut self, index: usize, rec: &FastqRecord) -> io::Result<()> {
        let wrap = self.opts.wrap;

        writeln!(self.out, "{}", dim().paint(format!("Record {}:", index + 1)))?;
        writeln!(self.out, "{INDENT}{}", colorize_header(&rec.header, '@'))?;

        for chunk in chunks(&rec.seq, wrap) {
            if self.opts.color_bases {
                writeln!(self.out, "{INDENT}{}", color_sequence(chunk))?;
            } else {
                writeln!(self.out, "{INDENT}{chunk}")?;
            }
        }

        writeln!(self.out, "{INDENT}{}", colorize_separator(&rec.plus))?;

        for chunk in chunks(&rec.qual, wrap) {
            write!(self.out, "{INDENT}{}", quality_blocks(chunk))?;
            if self.opts.raw_quality {
                write!(self.out, "{INDENT}{}", dim().paint(chunk))?;
            }
            writeln!(self.out)?;
        }

        writeln!(self.out)
    }

    /// Legend (if enabled), banner, then every record in order.
    /// Records already written stay written when a later one fails to read.
    pub fn run<I>(&mut self, title: &str, records: I) -> Result<usize, FastqError>
    where
        I: IntoIterator<Item = Result<FastqRecord, FastqError>>,
    {
        if self.opts.legend {
            self.legend().map_err(FastqError::Output)?;
        }
        self.banner(title).map_err(FastqError::Output)?;

        let mut n = 0;
        for rec in records {
            let rec = match rec {
                Ok(rec) => rec,
                Err(err) => {
                    self.out.flush().map_err(FastqError::Output)?;
                    return Err(err);
                }
            };
            self.record(n, &rec).map_err(FastqError::Output)?;
            n += 1;
        }
        self.out.flush().map_err(FastqError::Output)?;
        log::debug!("rendered {n} record(s)");
        Ok(n)
    }
}

/// Open `path` and render it to `out`. The file is opened before anything is
/// written, so an unreadable path produces no output.
pub fn render_file<P: AsRef<Path>, W: Write>(
    path: P,
    opts: RenderOptions,
    out: W,
) -> Result<usize, FastqError> {
    let path = path.as_ref();
    let reader = FastqReader::from_path(path, opts.limit)?;
    let mut renderer = Renderer::new(out, opts);
    renderer.run(&path.display().to_string(), reader)
}
