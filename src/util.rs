use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

pub fn looks_like_gzip<R: Read + Seek>(mut r: R) -> io::Result<bool> {
    let mut magic = [0u8; 2];
    let pos = r.stream_position()?;
    let n = r.read(&mut magic)?;
    r.seek(SeekFrom::Start(pos))?;
    Ok(n >= 2 && magic == [0x1F, 0x8B])
}

/// `.gz`, `.fastq.gz` and `.fq.gz` all end in a `gz` extension.
pub fn has_gz_suffix(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("gz")
}

pub fn open_file(path: &Path) -> io::Result<File> {
    File::open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn gz_suffixes() {
        assert!(has_gz_suffix(Path::new("reads.gz")));
        assert!(has_gz_suffix(Path::new("reads.fastq.gz")));
        assert!(has_gz_suffix(Path::new("dir/reads.fq.gz")));
        assert!(!has_gz_suffix(Path::new("reads.fastq")));
        assert!(!has_gz_suffix(Path::new("reads.gzip")));
    }

    #[test]
    fn magic_sniff_restores_position() {
        let mut c = Cursor::new(vec![0x1F, 0x8B, 0x08, 0x00]);
        assert!(looks_like_gzip(&mut c).unwrap());
        assert_eq!(c.position(), 0);
        assert!(!looks_like_gzip(Cursor::new(b"@r1\n".to_vec())).unwrap());
        assert!(!looks_like_gzip(Cursor::new(Vec::new())).unwrap());
    }
}
