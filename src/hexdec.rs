//! src/hexdec.rs

use crate::error::{ConvertError, FormatError};

/// Decodes pairs of hex digits into `out`, in order.
///
/// Returns `false` if `hex` has an odd length, does not decode to exactly
/// `out.len()` bytes, or contains a non-hex character. On `false` the contents
/// of `out` are unspecified and must be discarded.
pub fn try_decode(hex: &str, out: &mut [u8]) -> bool {
    hex::decode_to_slice(hex, out).is_ok()
}

/// Decodes exactly `N` bytes from `hex`, reporting why decoding failed.
pub fn decode_exact<const N: usize>(hex: &str) -> Result<[u8; N], ConvertError> {
    let mut out = [0u8; N];
    hex::decode_to_slice(hex, &mut out)
        .map_err(|e| FormatError::from_hex(e, N * 2, hex.len()))?;
    Ok(out)
}
