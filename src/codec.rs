use base64::{prelude::BASE64_STANDARD, Engine};
use hex::FromHexError;
use thiserror::Error;

use super::xor_combine;

#[derive(Debug, PartialEq, Error)]
pub enum HexCombineError {
    #[error(transparent)]
    FromHex(#[from] FromHexError),
}

/// XOR two hex-encoded messages together, returning the hex-encoded result.
/// Padding and prefix-trimming behave as in [`xor_combine`].
/// Returns an error if either input is not valid hex.
pub fn xor_combine_hex(message: &str, key: &str) -> Result<String, HexCombineError> {
    let message = hex::decode(message)?;
    let key = hex::decode(key)?;

    Ok(hex::encode(xor_combine(&message, &key)))
}

#[derive(Debug, PartialEq, Error)]
pub enum Base64CombineError {
    #[error(transparent)]
    Base64Decode(#[from] base64::DecodeError),
}

/// XOR two base64-encoded messages together, returning the base64-encoded
/// result. Padding and prefix-trimming behave as in [`xor_combine`].
/// Returns an error if either input is not valid standard-alphabet base64.
pub fn xor_combine_base64(message: &str, key: &str) -> Result<String, Base64CombineError> {
    let message = BASE64_STANDARD.decode(message)?;
    let key = BASE64_STANDARD.decode(key)?;

    Ok(BASE64_STANDARD.encode(xor_combine(&message, &key)))
}
