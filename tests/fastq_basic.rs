use fqview::{FastqError, FastqReader, FastqRecord};
use std::io::{BufReader, Write};
use tempfile::tempdir;

const SAMPLE: &str = "\
@read1 desc
ACGTN
+
!!!!!
@read2
ACGT
+read2
####";

fn collect(data: &'static str, limit: Option<usize>) -> Vec<FastqRecord> {
    FastqReader::from_bufread(BufReader::new(data.as_bytes()), limit)
        .map(|r| r.unwrap())
        .collect()
}

#[test]
fn parse_two_records() {
    let recs = collect(SAMPLE, None);
    assert_eq!(recs.len(), 2);

    assert_eq!(recs[0].header, "@read1 desc");
    assert_eq!(recs[0].seq, "ACGTN");
    assert_eq!(recs[0].plus, "+");
    assert_eq!(recs[0].qual, "!!!!!");

    assert_eq!(recs[1].header, "@read2");
    assert_eq!(recs[1].plus, "+read2");
    assert_eq!(recs[1].qual, "####");
}

#[test]
fn limit_stops_early() {
    let mut fq = FastqReader::from_bufread(BufReader::new(SAMPLE.as_bytes()), Some(1));
    assert_eq!(fq.next().unwrap().unwrap().header, "@read1 desc");
    assert!(fq.next().is_none());
    assert!(fq.next().is_none());
    assert_eq!(fq.records_read(), 1);

    assert!(collect(SAMPLE, Some(0)).is_empty());
    assert_eq!(collect(SAMPLE, Some(100)).len(), 2);
}

#[test]
fn truncated_trailing_record_is_dropped() {
    let data = "\
@r1
ACGT
+
IIII
@r2
ACGT
+
";
    let recs = collect(data, None);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].header, "@r1");
}

#[test]
fn blank_sequence_mid_file_ends_stream() {
    let data = "@r1\n\n+\nI\n@r2\nA\n+\nI\n";
    assert!(collect(data, None).is_empty());
}

#[test]
fn blank_separator_mid_file_ends_stream() {
    let data = "@r1\nA\n+\nI\n@r2\nC\n\nI\n@r3\nG\n+\nI\n";
    let recs = collect(data, None);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].header, "@r1");
}

#[test]
fn blank_line_ends_stream() {
    let data = "@r1\nA\n+\nI\n\n@r2\nC\n+\nI\n";
    assert_eq!(collect(data, None).len(), 1);
}

#[test]
fn crlf_and_length_mismatch_pass_through() {
    let data = "@r1\r\nACGTAC\r\n+\r\nII\r\n";
    let recs = collect(data, None);
    assert_eq!(recs[0].seq, "ACGTAC");
    assert_eq!(recs[0].qual, "II");
}

#[test]
fn missing_file_fails_before_reading() {
    let dir = tempdir().unwrap();
    let err = FastqReader::from_path(dir.path().join("nope.fastq"), None)
        .err()
        .expect("missing file must fail");
    assert!(matches!(err, FastqError::NotFound { .. }));
    assert!(err.to_string().contains("nope.fastq"));
}

#[test]
fn reads_plain_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.fastq");
    {
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"@id/1\nACGTN\n+\nIIIII\n").unwrap();
    }
    let recs: Vec<_> = FastqReader::from_path(&path, None)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        recs,
        vec![FastqRecord {
            header: "@id/1".into(),
            seq: "ACGTN".into(),
            plus: "+".into(),
            qual: "IIIII".into(),
        }]
    );
}

#[test]
fn one_char_per_byte() {
    // 0xC3 0xA9 is UTF-8 for one character but two quality values here
    let data: &'static [u8] = b"@r\xE9\nAC\n+\n\xC3\xA9\n";
    let rec = FastqReader::from_bufread(BufReader::new(data), None)
        .next()
        .unwrap()
        .unwrap();
    assert_eq!(rec.qual.chars().count(), 2);
    assert_eq!(rec.qual, "\u{C3}\u{A9}");
    assert_eq!(rec.header, "@r\u{E9}");
    let scores: Vec<i32> = rec.qual.chars().map(fqview::phred_score).collect();
    assert_eq!(scores, vec![0xC3 - 33, 0xA9 - 33]);
}

#[cfg(feature = "mmap")]
#[test]
fn reads_plain_file_through_mmap() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mapped.fq");
    std::fs::write(&path, "@r1\r\nACGT\r\n+\r\nIIII\r\n@r2\nAC\n+\n##\n@r3\nA\n").unwrap();

    let recs: Vec<_> = FastqReader::from_path(&path, None)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].seq, "ACGT");
    assert_eq!(recs[0].qual, "IIII");
    assert_eq!(recs[1].header, "@r2");
    assert_eq!(recs[1].qual, "##");
}
