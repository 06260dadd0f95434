use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser};
use fqview::{DEFAULT_RECORD_LIMIT, RenderOptions};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const AFTER_HELP: &str = "\
Examples:
  fqview reads.fastq -n 5          # Show first 5 records
  fqview reads.fastq.gz -n 10      # Works with gzipped files
  fqview reads.fq --no-seq-color   # Disable sequence coloring
  fqview reads.fastq --legend      # Show quality color legend";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

/// Display FASTQ files with colorful quality visualization
#[derive(Parser, Debug)]
#[command(
    name = "fqview",
    version = VERSION,
    after_help = AFTER_HELP,
    styles = STYLES
)]
pub struct Cli {
    /// input FASTQ file (supports .gz)
    pub fastq: String,

    /// number of records to display
    #[arg(short, long = "num-records", default_value_t = DEFAULT_RECORD_LIMIT)]
    pub num_records: usize,

    /// display every record, ignoring --num-records
    #[arg(long, conflicts_with = "num_records")]
    pub all: bool,

    /// disable coloring of sequence bases
    #[arg(long)]
    pub no_seq_color: bool,

    /// show quality score color legend
    #[arg(long)]
    pub legend: bool,

    /// show raw quality string alongside colored blocks
    #[arg(long)]
    pub raw_quality: bool,

    /// wrap long sequences at this width (0 = no wrap)
    #[arg(long, default_value_t = 0)]
    pub wrap: usize,

    /// more log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            limit: (!self.all).then_some(self.num_records),
            color_bases: !self.no_seq_color,
            wrap: self.wrap,
            raw_quality: self.raw_quality,
            legend: self.legend,
        }
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
