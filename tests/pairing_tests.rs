//! End-to-end pairing tests over real files.
//!
//! These exercise `pair_files` against inputs written to a temporary
//! directory and check the properties every run must satisfy: each input
//! record lands in exactly one output, paired outputs line up, and results
//! do not depend on the table size.

use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::TempDir;

use fastq_pair::{pair_files, PairError, PairingConfig, PairingSummary, TruncatedRecordPolicy};

fn record(name: &str, seq: &str) -> String {
    format!("@{name}\n{seq}\n+\n{}\n", "I".repeat(seq.len()))
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write input");
    path
}

fn output(path: &Path, suffix: &str) -> String {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    fs::read_to_string(PathBuf::from(name)).expect("Failed to read output")
}

/// Split FASTQ text into its four-line records
fn records(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    lines.chunks(4).map(|chunk| chunk.concat()).collect()
}

fn header_set(text: &str) -> BTreeSet<String> {
    records(text)
        .iter()
        .map(|r| r.lines().next().unwrap_or_default().to_string())
        .collect()
}

/// Left has reads 0..40 except multiples of 3, right has 0..40 except multiples of 5,
/// with the right file in reverse order.
fn filtered_inputs(dir: &Path) -> (PathBuf, PathBuf) {
    let left: String = (0..40)
        .filter(|i| i % 3 != 0)
        .map(|i| record(&format!("read{i}/1"), "ACGTACGT"))
        .collect();
    let right: String = (0..40)
        .rev()
        .filter(|i| i % 5 != 0)
        .map(|i| record(&format!("read{i}/2"), "TTGGCCAA"))
        .collect();
    (
        write_file(dir, "left.fq", &left),
        write_file(dir, "right.fq", &right),
    )
}

#[test]
fn test_concrete_scenario() {
    let dir = TempDir::new().unwrap();
    let left = write_file(
        dir.path(),
        "a.fq",
        &(record("readA/1", "ACGT") + &record("readB/1", "GGGG")),
    );
    let right = write_file(
        dir.path(),
        "b.fq",
        &(record("readA/2", "TTTT") + &record("readC/2", "CCCC")),
    );

    let summary = pair_files(&left, &right, &PairingConfig::default()).unwrap();

    assert_eq!(
        summary,
        PairingSummary {
            left_paired: 1,
            right_paired: 1,
            left_single: 1,
            right_single: 1,
        }
    );
    assert_eq!(output(&left, ".paired.fq"), record("readA/1", "ACGT"));
    assert_eq!(output(&right, ".paired.fq"), record("readA/2", "TTTT"));
    assert_eq!(output(&left, ".single.fq"), record("readB/1", "GGGG"));
    assert_eq!(output(&right, ".single.fq"), record("readC/2", "CCCC"));
}

#[test]
fn test_partition_and_count_consistency() {
    let dir = TempDir::new().unwrap();
    let (left, right) = filtered_inputs(dir.path());

    let summary = pair_files(&left, &right, &PairingConfig::default()).unwrap();

    let left_in: BTreeSet<String> = records(&fs::read_to_string(&left).unwrap())
        .into_iter()
        .collect();
    let right_in: BTreeSet<String> = records(&fs::read_to_string(&right).unwrap())
        .into_iter()
        .collect();

    let left_paired = records(&output(&left, ".paired.fq"));
    let left_single = records(&output(&left, ".single.fq"));
    let right_paired = records(&output(&right, ".paired.fq"));
    let right_single = records(&output(&right, ".single.fq"));

    // Every record lands in exactly one output.
    let left_out: BTreeSet<String> = left_paired.iter().chain(&left_single).cloned().collect();
    let right_out: BTreeSet<String> = right_paired.iter().chain(&right_single).cloned().collect();
    assert_eq!(left_out, left_in);
    assert_eq!(right_out, right_in);
    assert_eq!(left_paired.len() + left_single.len(), left_in.len());
    assert_eq!(right_paired.len() + right_single.len(), right_in.len());

    // Reads present in both files: not divisible by 3 or 5.
    let expected_pairs = (0..40).filter(|i| i % 3 != 0 && i % 5 != 0).count() as u64;
    assert_eq!(summary.left_paired, expected_pairs);
    assert_eq!(summary.right_paired, expected_pairs);
    assert_eq!(left_paired.len() as u64, summary.right_paired);
    assert_eq!(right_paired.len() as u64, summary.right_paired);
    assert_eq!(left_single.len() as u64, summary.left_single);
    assert_eq!(right_single.len() as u64, summary.right_single);

    // Paired outputs line up record for record.
    for (l, r) in left_paired.iter().zip(&right_paired) {
        let l_name = l.lines().next().unwrap().trim_end_matches("/1");
        let r_name = r.lines().next().unwrap().trim_end_matches("/2");
        assert_eq!(l_name, r_name);
    }
}

#[test]
fn test_deterministic_output() {
    let dir = TempDir::new().unwrap();
    let (left, right) = filtered_inputs(dir.path());
    let config = PairingConfig::new(7).unwrap();

    pair_files(&left, &right, &config).unwrap();
    let first: Vec<String> = [".paired.fq", ".single.fq"]
        .iter()
        .flat_map(|s| [output(&left, s), output(&right, s)])
        .collect();

    pair_files(&left, &right, &config).unwrap();
    let second: Vec<String> = [".paired.fq", ".single.fq"]
        .iter()
        .flat_map(|s| [output(&left, s), output(&right, s)])
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_table_size_does_not_change_partition() {
    let dir = TempDir::new().unwrap();
    let (left, right) = filtered_inputs(dir.path());

    let mut results = Vec::new();
    for table_size in [1, 2, 13, 100_003] {
        let config = PairingConfig::new(table_size).unwrap();
        let summary = pair_files(&left, &right, &config).unwrap();
        results.push((
            summary,
            header_set(&output(&left, ".paired.fq")),
            header_set(&output(&left, ".single.fq")),
            output(&right, ".paired.fq"),
            output(&right, ".single.fq"),
        ));
    }

    for other in &results[1..] {
        assert_eq!(other, &results[0]);
    }
}

#[test]
fn test_duplicate_left_names_use_first_occurrence() {
    let dir = TempDir::new().unwrap();
    let left = write_file(
        dir.path(),
        "left.fq",
        &(record("dup/1", "AAAA") + &record("other/1", "CCCC") + &record("dup/1", "GGGG")),
    );
    let right = write_file(dir.path(), "right.fq", &record("dup/2", "TTTT"));

    let summary = pair_files(&left, &right, &PairingConfig::new(1).unwrap()).unwrap();

    assert_eq!(output(&left, ".paired.fq"), record("dup/1", "AAAA"));
    assert_eq!(output(&left, ".single.fq"), record("other/1", "CCCC"));
    assert_eq!(summary.left_single, 1);
}

#[test]
fn test_verbatim_copy_of_crlf_and_comments() {
    let dir = TempDir::new().unwrap();
    let left_text = "@frag7/f extra words\r\nACGT\r\n+frag7\r\nIIII\r\n";
    let right_text = "@frag7/r\tother\r\nTTTT\r\n+\r\n####\r\n";
    let left = write_file(dir.path(), "left.fq", left_text);
    let right = write_file(dir.path(), "right.fq", right_text);

    pair_files(&left, &right, &PairingConfig::default()).unwrap();

    assert_eq!(output(&left, ".paired.fq"), left_text);
    assert_eq!(output(&right, ".paired.fq"), right_text);
}

#[test]
fn test_known_limitation_names_ending_in_suffix_byte() {
    // "sample1" and "sample2" are different reads, but both lose their last
    // byte and are treated as mates.
    let dir = TempDir::new().unwrap();
    let left = write_file(dir.path(), "left.fq", &record("sample1", "ACGT"));
    let right = write_file(dir.path(), "right.fq", &record("sample2", "ACGT"));

    let summary = pair_files(&left, &right, &PairingConfig::default()).unwrap();
    assert_eq!(summary.right_paired, 1);
}

#[test]
fn test_gzipped_right_input() {
    let dir = TempDir::new().unwrap();
    let left = write_file(
        dir.path(),
        "left.fq",
        &(record("r1/1", "ACGT") + &record("r2/1", "GGCC")),
    );

    let right = dir.path().join("right.fq.gz");
    let mut encoder = GzEncoder::new(fs::File::create(&right).unwrap(), Compression::default());
    encoder.write_all(record("r2/2", "TTAA").as_bytes()).unwrap();
    encoder.finish().unwrap();

    let summary = pair_files(&left, &right, &PairingConfig::default()).unwrap();

    assert_eq!(summary.right_paired, 1);
    assert_eq!(output(&left, ".paired.fq"), record("r2/1", "GGCC"));
    assert_eq!(output(&right, ".paired.fq"), record("r2/2", "TTAA"));
}

#[test]
fn test_gzipped_left_input_rejected() {
    let dir = TempDir::new().unwrap();
    let left = write_file(dir.path(), "left.fq.gz", "");
    let right = write_file(dir.path(), "right.fq", &record("r1/2", "ACGT"));

    let result = pair_files(&left, &right, &PairingConfig::default());
    assert!(matches!(result, Err(PairError::CompressedLeftInput(_))));
}

#[test]
fn test_missing_input() {
    let dir = TempDir::new().unwrap();
    let right = write_file(dir.path(), "right.fq", &record("r1/2", "ACGT"));

    let result = pair_files(&dir.path().join("nope.fq"), &right, &PairingConfig::default());
    assert!(matches!(result, Err(PairError::OpenInput { .. })));
}

#[test]
fn test_truncated_trailing_record_policies() {
    let dir = TempDir::new().unwrap();
    let left = write_file(dir.path(), "left.fq", &record("r1/1", "ACGT"));
    let right_text = record("r1/2", "TTTT") + "@r9/2\nAC\n";
    let right = write_file(dir.path(), "right.fq", &right_text);

    let lenient = PairingConfig::default().with_truncated_records(TruncatedRecordPolicy::Silent);
    let summary = pair_files(&left, &right, &lenient).unwrap();
    assert_eq!(summary.right_single, 1);
    assert_eq!(output(&right, ".single.fq"), "@r9/2\nAC\n");

    let strict = PairingConfig::default().with_truncated_records(TruncatedRecordPolicy::Strict);
    assert!(matches!(
        pair_files(&left, &right, &strict),
        Err(PairError::TruncatedRecord { lines: 2, .. })
    ));
}

#[test]
fn test_over_length_line_reported() {
    let dir = TempDir::new().unwrap();
    let left = write_file(dir.path(), "left.fq", &record("r1/1", &"A".repeat(500)));
    let right = write_file(dir.path(), "right.fq", &record("r1/2", "ACGT"));

    let config = PairingConfig::default().with_max_line_length(100).unwrap();
    match pair_files(&left, &right, &config) {
        Err(PairError::LineTooLong { offset, limit, .. }) => {
            assert_eq!(offset, 6);
            assert_eq!(limit, 100);
        }
        other => panic!("expected LineTooLong, got {other:?}"),
    }
}

#[test]
fn test_largest_max_line_length_pairs_normally() {
    let dir = TempDir::new().unwrap();
    let left = write_file(dir.path(), "left.fq", &record("a/1", "ACGT"));
    let right = write_file(dir.path(), "right.fq", &record("a/2", "TTTT"));

    let config = PairingConfig::default().with_max_line_length(usize::MAX).unwrap();
    let summary = pair_files(&left, &right, &config).unwrap();

    assert_eq!(summary.left_paired, 1);
    assert_eq!(summary.right_paired, 1);
    assert_eq!(output(&left, ".paired.fq"), record("a/1", "ACGT"));
}
