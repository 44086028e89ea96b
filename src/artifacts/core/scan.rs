//! Bounds-checked byte scanning
//!
//! Object envelopes, commit headers and tree entries are all made of
//! delimiter-terminated fields followed by fixed-width ones. These helpers
//! read them from any `BufRead` and report a missing delimiter or a short
//! read as `None` instead of reading past the end of the buffer.

use std::io::{self, BufRead, Read};

/// Read bytes up to `delimiter`, returning them without the delimiter.
///
/// Returns `None` when the input ends before the delimiter shows up,
/// including when nothing is left to read.
pub fn read_delimited(reader: &mut impl BufRead, delimiter: u8) -> io::Result<Option<Vec<u8>>> {
    let mut field = Vec::new();
    reader.read_until(delimiter, &mut field)?;

    match field.pop() {
        Some(last) if last == delimiter => Ok(Some(field)),
        _ => Ok(None),
    }
}

/// Read exactly `N` bytes, or `None` when fewer are left.
pub fn read_fixed<const N: usize>(reader: &mut impl Read) -> io::Result<Option<[u8; N]>> {
    let mut field = [0; N];

    match reader.read_exact(&mut field) {
        Ok(()) => Ok(Some(field)),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e),
    }
}

/// Check whether the reader has no bytes left.
pub fn is_exhausted(reader: &mut impl BufRead) -> io::Result<bool> {
    Ok(reader.fill_buf()?.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_delimited_stops_at_first_delimiter() {
        let mut reader = Cursor::new(b"100644 a b\0rest".to_vec());

        assert_eq!(
            read_delimited(&mut reader, b' ').unwrap(),
            Some(b"100644".to_vec())
        );
        assert_eq!(
            read_delimited(&mut reader, b'\0').unwrap(),
            Some(b"a b".to_vec())
        );
    }

    #[test]
    fn read_delimited_reports_missing_delimiter() {
        let mut reader = Cursor::new(b"no-nul-here".to_vec());
        assert_eq!(read_delimited(&mut reader, b'\0').unwrap(), None);

        let mut empty = Cursor::new(Vec::new());
        assert_eq!(read_delimited(&mut empty, b' ').unwrap(), None);
    }

    #[test]
    fn read_fixed_reports_short_input() {
        let mut reader = Cursor::new(vec![1, 2, 3]);
        assert_eq!(read_fixed::<2>(&mut reader).unwrap(), Some([1, 2]));
        assert_eq!(read_fixed::<2>(&mut reader).unwrap(), None);
    }

    #[test]
    fn is_exhausted_tracks_position() {
        let mut reader = Cursor::new(vec![7]);
        assert!(!is_exhausted(&mut reader).unwrap());
        read_fixed::<1>(&mut reader).unwrap();
        assert!(is_exhausted(&mut reader).unwrap());
    }
}
