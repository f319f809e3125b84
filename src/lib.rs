//! Hex account identifier to Base58Check Tron address conversion.

pub mod address;
pub mod base58;
pub mod checksum;
pub mod error;
pub mod hexdec;
pub mod worker;

pub use address::{convert, hex_to_tron_address, ToTronAddress, ADDRESS_VERSION};
pub use error::{ConvertError, FormatError};
pub use worker::{BatchConverter, Conversion};
