use base64::prelude::*;
use clap::Parser;
use gatecipher::crypto::aes::KeySize;
use log::{debug, error, warn};
use std::error::Error;
use std::process::ExitCode;
use std::str::FromStr;
use strum_macros::EnumString;

#[derive(EnumString, Debug, Clone, Copy)]
#[strum(ascii_case_insensitive)]
enum Mode {
    #[strum(serialize = "encrypt", serialize = "enc")]
    Encrypt,
    #[strum(serialize = "decrypt", serialize = "dec")]
    Decrypt,
}

#[derive(EnumString, Debug, Clone, Copy)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
enum Encoding {
    Base64,
    Hex,
}

impl Encoding {
    fn encode(self, bytes: &[u8]) -> String {
        match self {
            Encoding::Base64 => BASE64_STANDARD.encode(bytes),
            Encoding::Hex => hex::encode(bytes),
        }
    }

    fn decode(self, text: &str) -> Result<Vec<u8>, Box<dyn Error>> {
        let bytes = match self {
            Encoding::Base64 => BASE64_STANDARD.decode(text.trim())?,
            Encoding::Hex => hex::decode(text.trim())?,
        };
        Ok(bytes)
    }
}

/// AES-CBC with a zero IV, as spoken by the legacy API gateway.
#[derive(Parser, Debug)]
struct Args {
    /// encrypt | decrypt
    mode: String,

    /// Plaintext to encrypt, or encoded ciphertext to decrypt
    data: String,

    /// Hex-encoded 16 or 32 byte key
    #[arg(short, long, env = "GATECIPHER_KEY", hide_env_values = true)]
    key: String,

    /// Ciphertext encoding: base64 | hex. Also used for decrypted output
    /// that is not valid UTF-8
    #[arg(short, long, default_value = "base64")]
    encoding: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{} failed: {e}", args.mode);
            eprintln!("gatecipher: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, Box<dyn Error>> {
    let mode = Mode::from_str(&args.mode)?;
    let encoding = Encoding::from_str(&args.encoding)?;
    let key = hex::decode(args.key.trim())?;
    let size = KeySize::of(&key)?;
    debug!("{mode:?} with {size:?}, {} input bytes", args.data.len());

    match mode {
        Mode::Encrypt => {
            let ciphertext = gatecipher::encrypt(args.data.as_bytes(), &key)?;
            debug!("produced {} ciphertext bytes", ciphertext.len());
            Ok(encoding.encode(&ciphertext))
        }
        Mode::Decrypt => {
            let ciphertext = encoding.decode(&args.data)?;
            let plaintext = gatecipher::decrypt(&ciphertext, &key)?;
            debug!("recovered {} plaintext bytes", plaintext.len());
            match String::from_utf8(plaintext) {
                Ok(text) => Ok(text),
                Err(e) => {
                    warn!("plaintext is not UTF-8, printing it as {encoding:?}");
                    Ok(encoding.encode(e.as_bytes()))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "01010101010101010101010101010101";

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(["gatecipher"].iter().chain(argv))
    }

    #[test]
    fn encrypt_base64() {
        let out = run(&args(&["encrypt", "HELLO", "-k", KEY])).unwrap();
        assert_eq!(out, "HsW256/oIp9cZRIfQYD9bA==");
    }

    #[test]
    fn decrypt_hex() {
        let argv = ["DEC", "1ec5b6e7afe8229f5c65121f4180fd6c", "-k", KEY, "-e", "hex"];
        assert_eq!(run(&args(&argv)).unwrap(), "HELLO");
    }

    #[test]
    fn decrypt_binary_plaintext_as_encoding() {
        let key = hex::decode(KEY).unwrap();
        let ciphertext = gatecipher::encrypt(&[0xff, 0xfe, 0x00], &key).unwrap();
        let data = hex::encode(ciphertext);
        let argv = ["decrypt", data.as_str(), "-k", KEY, "-e", "hex"];
        assert_eq!(run(&args(&argv)).unwrap(), "fffe00");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(run(&args(&["sign", "HELLO", "-k", KEY])).is_err());
        assert!(run(&args(&["encrypt", "HELLO", "-k", "0101"])).is_err());
        assert!(run(&args(&["decrypt", "!!", "-k", KEY])).is_err());
    }
}
