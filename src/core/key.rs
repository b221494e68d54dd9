//! Read-name normalization.
//!
//! Mates are matched on the first whitespace-delimited token of the header
//! line with a single trailing mate marker removed, so `@read42/1` and
//! `@read42/2` both become `@read42`.

/// Trailing bytes treated as a mate marker (`/1`, `/2`, `/f`, `/r`).
pub const MATE_SUFFIXES: [u8; 4] = [b'1', b'2', b'f', b'r'];

/// Derive the matching key from a raw FASTQ header line.
///
/// The header may still carry its line terminator. Everything from the first
/// ASCII whitespace byte onwards is dropped, then one trailing byte is removed
/// if it is one of [`MATE_SUFFIXES`].
///
/// The preceding byte is not checked for a `/`, so a name that genuinely ends
/// in `1`, `2`, `f` or `r` loses that byte too:
///
/// ```
/// use fastq_pair::core::key::normalize_header;
///
/// assert_eq!(normalize_header(b"@read42/1 1:N:0:ACGT\n"), b"@read42/");
/// assert_eq!(normalize_header(b"@sample_11\n"), b"@sample_1");
/// ```
#[must_use]
pub fn normalize_header(header: &[u8]) -> &[u8] {
    let end = header
        .iter()
        .position(u8::is_ascii_whitespace)
        .unwrap_or(header.len());
    let token = &header[..end];

    match token.split_last() {
        Some((last, rest)) if MATE_SUFFIXES.contains(last) => rest,
        _ => token,
    }
}
