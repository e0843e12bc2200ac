pub mod aes {

    use ::aes::cipher::block_padding::{NoPadding, Pkcs7};
    use ::aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

    use crate::pad::BLOCK_SIZE;
    use crate::{Error, Result};

    pub type IV = [u8; BLOCK_SIZE];

    /// The IV shared with the legacy gateway: sixteen zero bytes, never sent
    /// on the wire.
    ///
    /// A constant IV makes CBC deterministic. Two messages under the same key
    /// that share a leading block produce the same leading ciphertext block,
    /// so an observer learns where plaintexts agree. Only use this scheme to
    /// talk to a peer that already requires it.
    pub const ZERO_IV: IV = [0; BLOCK_SIZE];

    type Aes128CbcEnc = cbc::Encryptor<::aes::Aes128>;
    type Aes128CbcDec = cbc::Decryptor<::aes::Aes128>;
    type Aes256CbcEnc = cbc::Encryptor<::aes::Aes256>;
    type Aes256CbcDec = cbc::Decryptor<::aes::Aes256>;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum KeySize {
        Aes128,
        Aes256,
    }

    impl KeySize {
        /// AES-192 keys are refused; the gateway only speaks 128 and 256.
        pub fn of(key: &[u8]) -> Result<KeySize> {
            match key.len() {
                16 => Ok(KeySize::Aes128),
                32 => Ok(KeySize::Aes256),
                n => Err(Error::InvalidKey(n)),
            }
        }
    }

    /// Pads `plaintext` and encrypts it under `key` with [`ZERO_IV`].
    pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        let size = KeySize::of(key)?;
        let invalid = |_| Error::InvalidKey(key.len());
        let ciphertext = match size {
            KeySize::Aes128 => Aes128CbcEnc::new_from_slices(key, &ZERO_IV)
                .map_err(invalid)?
                .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
            KeySize::Aes256 => Aes256CbcEnc::new_from_slices(key, &ZERO_IV)
                .map_err(invalid)?
                .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        };
        if ciphertext.len() % BLOCK_SIZE != 0 || ciphertext.len() <= plaintext.len() {
            return Err(Error::Padding(ciphertext.len()));
        }
        Ok(ciphertext)
    }

    /// Decrypts `ciphertext` under `key` with [`ZERO_IV`] and strips the
    /// padding, rejecting padding that is not well formed.
    pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        let size = KeySize::of(key)?;
        if ciphertext.len() < BLOCK_SIZE {
            return Err(Error::ShortInput(ciphertext.len()));
        }
        if ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(Error::Alignment(ciphertext.len()));
        }
        let invalid = |_| Error::InvalidKey(key.len());
        let unpad = |_| Error::BadPadding;
        match size {
            KeySize::Aes128 => Aes128CbcDec::new_from_slices(key, &ZERO_IV)
                .map_err(invalid)?
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
                .map_err(unpad),
            KeySize::Aes256 => Aes256CbcDec::new_from_slices(key, &ZERO_IV)
                .map_err(invalid)?
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
                .map_err(unpad),
        }
    }

    /// Raw CBC encryption of block-aligned data, no padding added.
    pub fn encrypt_blocks(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        let size = KeySize::of(key)?;
        if data.len() % BLOCK_SIZE != 0 {
            return Err(Error::Alignment(data.len()));
        }
        let invalid = |_| Error::InvalidKey(key.len());
        let buf = match size {
            KeySize::Aes128 => Aes128CbcEnc::new_from_slices(key, &ZERO_IV)
                .map_err(invalid)?
                .encrypt_padded_vec_mut::<NoPadding>(data),
            KeySize::Aes256 => Aes256CbcEnc::new_from_slices(key, &ZERO_IV)
                .map_err(invalid)?
                .encrypt_padded_vec_mut::<NoPadding>(data),
        };
        Ok(buf)
    }

    /// Raw CBC decryption of block-aligned data; padding is left in place.
    pub fn decrypt_blocks(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        let size = KeySize::of(key)?;
        if data.len() % BLOCK_SIZE != 0 {
            return Err(Error::Alignment(data.len()));
        }
        let invalid = |_| Error::InvalidKey(key.len());
        let unaligned = |_| Error::Alignment(data.len());
        match size {
            KeySize::Aes128 => Aes128CbcDec::new_from_slices(key, &ZERO_IV)
                .map_err(invalid)?
                .decrypt_padded_vec_mut::<NoPadding>(data)
                .map_err(unaligned),
            KeySize::Aes256 => Aes256CbcDec::new_from_slices(key, &ZERO_IV)
                .map_err(invalid)?
                .decrypt_padded_vec_mut::<NoPadding>(data)
                .map_err(unaligned),
        }
    }
}
