//! src/base58.rs

/// The Bitcoin Base58 alphabet (no `0`, `O`, `I` or `l`).
pub const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Base58-encodes `bytes` with the Bitcoin alphabet.
///
/// Leading zero bytes become leading `1`s. No checksum is added here: callers
/// append their own trailer before encoding.
pub fn encode(bytes: &[u8]) -> String {
    bs58::encode(bytes)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_string()
}
