//! src/address.rs

use crate::base58;
use crate::checksum::{checksum, CHECKSUM_LEN};
use crate::error::ConvertError;
use crate::hexdec;
use tracing::debug;

/// Tron mainnet address-version byte.
pub const ADDRESS_VERSION: u8 = 0x41;

/// Length of a raw account identifier in bytes.
pub const ADDRESS_LEN: usize = 20;

/// Length of a raw account identifier in hex digits.
pub const ADDRESS_HEX_LEN: usize = ADDRESS_LEN * 2;

/// `[version] || address`.
pub const VERSIONED_LEN: usize = ADDRESS_LEN + 1;

/// `[version] || address || checksum`, the exact input to Base58.
pub const ENCODED_LEN: usize = VERSIONED_LEN + CHECKSUM_LEN;

/// Strips an optional `0x`/`0X` prefix and keeps only the trailing
/// [`ADDRESS_HEX_LEN`] digits of longer inputs.
///
/// Over-length input is truncated from the left without complaint, so a
/// 32-byte word holding an address (`0x000000000000000000000000<address>`)
/// reduces to the address. Any non-zero bytes in the dropped part are lost
/// silently as well.
pub fn normalize_hex(hex: &str) -> &str {
    let hex = match hex.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("0x") => &hex[2..],
        _ => hex,
    };
    if hex.len() > ADDRESS_HEX_LEN {
        // A non-boundary cut means non-ASCII input, which fails decoding anyway.
        hex.get(hex.len() - ADDRESS_HEX_LEN..).unwrap_or(hex)
    } else {
        hex
    }
}

/// Prepends the version byte to a raw address.
pub fn versioned_payload(address: &[u8; ADDRESS_LEN]) -> [u8; VERSIONED_LEN] {
    let mut payload = [0u8; VERSIONED_LEN];
    payload[0] = ADDRESS_VERSION;
    payload[1..].copy_from_slice(address);
    payload
}

/// Appends the double-SHA256 checksum to a versioned payload.
pub fn encoded_payload(versioned: &[u8; VERSIONED_LEN]) -> [u8; ENCODED_LEN] {
    let mut payload = [0u8; ENCODED_LEN];
    payload[..VERSIONED_LEN].copy_from_slice(versioned);
    payload[VERSIONED_LEN..].copy_from_slice(&checksum(versioned));
    payload
}

/// Converts a hex account identifier to a Base58Check Tron address.
///
/// `None` and the empty string convert to `Ok(None)`. Anything else must be
/// exactly 20 bytes of hex after [`normalize_hex`], otherwise
/// [`ConvertError::InvalidFormat`] is returned.
pub fn convert(hex_address: Option<&str>) -> Result<Option<String>, ConvertError> {
    let raw = match hex_address {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };

    // 1. Strip the prefix and reduce padded input to its low 20 bytes
    let hex = normalize_hex(raw);

    // 2. Decode to exactly 20 bytes
    let address = hexdec::decode_exact::<ADDRESS_LEN>(hex)?;

    // 3. Prepend the Tron version byte
    let versioned = versioned_payload(&address);

    // 4. Append the first 4 bytes of SHA256(SHA256(payload))
    let encoded = encoded_payload(&versioned);

    // 5. Base58 encode the final payload
    let tron_address = base58::encode(&encoded);
    debug!(input = raw, address = %tron_address, "converted hex address");
    Ok(Some(tron_address))
}

/// Same as [`convert`] for a present input.
pub fn hex_to_tron_address(hex_address: &str) -> Result<Option<String>, ConvertError> {
    convert(Some(hex_address))
}

/// Conversion to a Tron address, callable directly on strings.
pub trait ToTronAddress {
    fn to_tron_address(&self) -> Result<Option<String>, ConvertError>;
}

impl ToTronAddress for str {
    fn to_tron_address(&self) -> Result<Option<String>, ConvertError> {
        hex_to_tron_address(self)
    }
}

impl<T: AsRef<str>> ToTronAddress for Option<T> {
    fn to_tron_address(&self) -> Result<Option<String>, ConvertError> {
        convert(self.as_ref().map(AsRef::as_ref))
    }
}
