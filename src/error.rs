use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid AES key length {0}: expected 16 or 32 bytes")]
    InvalidKey(usize),

    #[error("padded length {0} is not a multiple of the block size")]
    Padding(usize),

    #[error("ciphertext of {0} bytes is shorter than one block")]
    ShortInput(usize),

    #[error("ciphertext length {0} is not a multiple of the block size")]
    Alignment(usize),

    #[error("malformed PKCS#5 padding")]
    BadPadding,
}
