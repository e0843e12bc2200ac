pub type Result<T> = std::result::Result<T, Error>;

pub mod crypto;
pub mod error;
pub mod pad;

pub use crypto::aes::{decrypt, encrypt, ZERO_IV};
pub use error::Error;
