/// One 4-line FASTQ framing unit, line terminators stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    pub header: String,
    pub seq: String,
    pub plus: String,
    pub qual: String,
}
