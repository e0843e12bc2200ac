//! PKCS#5 padding for 16-byte blocks.
//!
//! Every pad byte holds the pad length, and at least one byte is always
//! appended, so an already aligned input grows by a full block.

use ::aes::cipher::block_padding::{Pkcs7, RawPadding};

use crate::{Error, Result};

pub const BLOCK_SIZE: usize = 16;

pub fn pkcs5_pad(data: &[u8]) -> Vec<u8> {
    let tail = data.len() % BLOCK_SIZE;
    let len = data.len() - tail + BLOCK_SIZE;
    let mut padded = Vec::with_capacity(len);
    padded.extend_from_slice(data);
    padded.resize(len, 0);
    Pkcs7::raw_pad(&mut padded[len - BLOCK_SIZE..], tail);
    padded
}

/// Strips PKCS#5 padding, returning the data in front of it.
///
/// The last byte `n` must be in `1..=16` and the trailing `n` bytes must all
/// equal `n`; anything else is `Error::BadPadding`.
pub fn pkcs5_unpad(data: &[u8]) -> Result<&[u8]> {
    if data.is_empty() || data.len() % BLOCK_SIZE != 0 {
        return Err(Error::BadPadding);
    }
    let start = data.len() - BLOCK_SIZE;
    let kept = Pkcs7::raw_unpad(&data[start..])
        .map_err(|_| Error::BadPadding)?
        .len();
    Ok(&data[..start + kept])
}
