/// Records shown when no count is given.
pub const DEFAULT_RECORD_LIMIT: usize = 4;

/// Rendering options, resolved once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Maximum number of records to render; `None` renders the whole file.
    pub limit: Option<usize>,
    /// Color each base of the sequence line.
    pub color_bases: bool,
    /// Split sequence and quality into lines of this many characters (0 = off).
    pub wrap: usize,
    /// Echo the raw quality string after the colored blocks.
    pub raw_quality: bool,
    /// Print the quality color legend before the records.
    pub legend: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            limit: Some(DEFAULT_RECORD_LIMIT),
            color_bases: true,
            wrap: 0,
            raw_quality: false,
            legend: false,
        }
    }
}
