//! Splicing a re-encoded document back into its original buffer.

use crate::{Error, Region, Result};

/// Returns `original[..start] ++ replacement ++ original[end..]`.
///
/// Nothing outside `start..end` is touched and no other offset in the
/// buffer is adjusted, whatever the length of `replacement`.
///
/// # Errors
///
/// [`Error::InvalidRegion`] unless `start <= end <= original.len()`.
///
/// # Example
///
/// ```
/// use nbt_inventory::splice;
///
/// let out = splice(b"abcdef", 2, 4, b"XYZ").unwrap();
/// assert_eq!(out, b"abXYZef");
/// ```
pub fn splice(original: &[u8], start: usize, end: usize, replacement: &[u8]) -> Result<Vec<u8>> {
    check_region(original.len(), start, end)?;
    let mut out = Vec::with_capacity(original.len() - (end - start) + replacement.len());
    out.extend_from_slice(&original[..start]);
    out.extend_from_slice(replacement);
    out.extend_from_slice(&original[end..]);
    Ok(out)
}

/// [`splice`] over a located [`Region`].
pub fn splice_region(original: &[u8], region: Region, replacement: &[u8]) -> Result<Vec<u8>> {
    splice(original, region.start, region.end, replacement)
}

/// [`splice`] for shared buffers; the result is frozen into [`bytes::Bytes`].
#[cfg(feature = "shared")]
pub fn splice_shared(
    original: &bytes::Bytes,
    start: usize,
    end: usize,
    replacement: &[u8],
) -> Result<bytes::Bytes> {
    use bytes::BufMut;

    check_region(original.len(), start, end)?;
    let mut out = bytes::BytesMut::with_capacity(original.len() - (end - start) + replacement.len());
    out.put_slice(&original[..start]);
    out.put_slice(replacement);
    out.put_slice(&original[end..]);
    Ok(out.freeze())
}

fn check_region(len: usize, start: usize, end: usize) -> Result<()> {
    if start > end || end > len {
        return Err(Error::InvalidRegion { start, end, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_and_suffix_are_kept() {
        let original: Vec<u8> = (0..32).collect();
        let cases: [(usize, usize, &[u8]); 4] =
            [(0, 0, b""), (4, 10, b"ab"), (5, 5, b"xyz"), (0, 32, b"q")];
        for (start, end, new) in cases {
            let out = splice(&original, start, end, new).unwrap();
            assert_eq!(out.len(), original.len() - (end - start) + new.len());
            assert_eq!(&out[..start], &original[..start]);
            assert_eq!(&out[start..start + new.len()], new);
            assert_eq!(&out[start + new.len()..], &original[end..]);
        }
    }

    #[test]
    fn out_of_range_region_fails() {
        assert!(matches!(
            splice(b"abc", 2, 1, b""),
            Err(Error::InvalidRegion { start: 2, end: 1, len: 3 })
        ));
        assert!(matches!(
            splice(b"abc", 0, 4, b""),
            Err(Error::InvalidRegion { .. })
        ));
    }

    #[cfg(feature = "shared")]
    #[test]
    fn shared_matches_owned() {
        let original = bytes::Bytes::from_static(b"0123456789");
        let shared = splice_shared(&original, 3, 7, b"--").unwrap();
        assert_eq!(&shared[..], &splice(&original, 3, 7, b"--").unwrap()[..]);
        assert_eq!(&shared[..], b"012--789");
    }
}
