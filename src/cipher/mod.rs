//! Reversible text transforms and the fixed cipher catalog.
//!
//! A [`CipherId`] names one of the ten supported transforms. Pairing it with a
//! [`Key`] through [`Cipher::new`] validates the key up front, so a [`Cipher`]
//! value can always encode and decode without key errors.

mod affine;
mod atbash;
mod base64;
mod binary;
mod caesar;
mod hex;
mod morse;
mod rail_fence;
mod vigenere;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CipherError;

pub use affine::AffineKey;

pub type Result<T> = std::result::Result<T, CipherError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherId {
    Affine,
    Atbash,
    Base64,
    Binary,
    Caesar,
    Hex,
    Morse,
    RailFence,
    Rot13,
    Vigenere,
}

impl CipherId {
    pub const ALL: [CipherId; 10] = [
        CipherId::Affine,
        CipherId::Atbash,
        CipherId::Base64,
        CipherId::Binary,
        CipherId::Caesar,
        CipherId::Hex,
        CipherId::Morse,
        CipherId::RailFence,
        CipherId::Rot13,
        CipherId::Vigenere,
    ];

    pub fn as_str(self) -> &'static str {
        self.spec().id
    }

    pub fn display_name(self) -> &'static str {
        self.spec().display_name
    }

    pub fn spec(self) -> &'static CipherSpec {
        let index = match self {
            CipherId::Affine => 0,
            CipherId::Atbash => 1,
            CipherId::Base64 => 2,
            CipherId::Binary => 3,
            CipherId::Caesar => 4,
            CipherId::Hex => 5,
            CipherId::Morse => 6,
            CipherId::RailFence => 7,
            CipherId::Rot13 => 8,
            CipherId::Vigenere => 9,
        };
        &CATALOG[index]
    }
}

impl fmt::Display for CipherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CipherId {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        CipherId::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| CipherError::UnsupportedCipher(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    None,
    Integer,
    Text,
}

/// Published description of one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CipherSpec {
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub requires_key: bool,
    pub key_kind: KeyKind,
    pub key_label: Option<&'static str>,
    pub key_constraint: &'static str,
    pub example: &'static str,
}

pub const CATALOG: [CipherSpec; 10] = [
    CipherSpec {
        id: "affine",
        display_name: "Affine Cipher",
        description: "A substitution cipher using a linear mathematical transformation.",
        requires_key: true,
        key_kind: KeyKind::Text,
        key_label: Some("Key (a,b)"),
        key_constraint: "two integers `a,b`; `a` must be coprime with 26",
        example: "HELLO → RCLLA (a=5, b=8)",
    },
    CipherSpec {
        id: "atbash",
        display_name: "Atbash Cipher",
        description: "An ancient cipher that substitutes each letter with its opposite.",
        requires_key: false,
        key_kind: KeyKind::None,
        key_label: None,
        key_constraint: "no key",
        example: "HELLO → SVOOL",
    },
    CipherSpec {
        id: "base64",
        display_name: "Base64 Encoding",
        description: "Encode binary data into ASCII string format using Base64.",
        requires_key: false,
        key_kind: KeyKind::None,
        key_label: None,
        key_constraint: "no key",
        example: "HELLO → SEVMTE8=",
    },
    CipherSpec {
        id: "binary",
        display_name: "Binary Encoding",
        description: "Convert text into binary code representation.",
        requires_key: false,
        key_kind: KeyKind::None,
        key_label: None,
        key_constraint: "no key",
        example: "H → 01001000",
    },
    CipherSpec {
        id: "caesar",
        display_name: "Caesar Cipher",
        description: "Encrypt text by shifting characters a certain number of positions.",
        requires_key: true,
        key_kind: KeyKind::Integer,
        key_label: Some("Shift Amount"),
        key_constraint: "any integer shift, reduced modulo 26",
        example: "HELLO → KHOOR (shift of 3)",
    },
    CipherSpec {
        id: "hex",
        display_name: "Hexadecimal Encoding",
        description: "Encode text into hexadecimal format.",
        requires_key: false,
        key_kind: KeyKind::None,
        key_label: None,
        key_constraint: "no key",
        example: "HELLO → 48454C4C4F",
    },
    CipherSpec {
        id: "morse",
        display_name: "Morse Code",
        description: "Convert text into Morse code signals.",
        requires_key: false,
        key_kind: KeyKind::None,
        key_label: None,
        key_constraint: "no key",
        example: "SOS → ... --- ...",
    },
    CipherSpec {
        id: "rail_fence",
        display_name: "Rail Fence Cipher",
        description: "A transposition cipher that arranges characters in a zig-zag pattern.",
        requires_key: true,
        key_kind: KeyKind::Integer,
        key_label: Some("Number of Rails"),
        key_constraint: "a positive rail count; 1 or no key leaves the text unchanged",
        example: "HELLO → HOELL (3 rails)",
    },
    CipherSpec {
        id: "rot13",
        display_name: "ROT13 Cipher",
        description: "A simple cipher that shifts letters by 13 places in the alphabet.",
        requires_key: false,
        key_kind: KeyKind::None,
        key_label: None,
        key_constraint: "no key",
        example: "HELLO → URYYB",
    },
    CipherSpec {
        id: "vigenere",
        display_name: "Vigenère Cipher",
        description: "A method of encrypting alphabetic text by using a simple form of polyalphabetic substitution.",
        requires_key: true,
        key_kind: KeyKind::Text,
        key_label: Some("Keyword"),
        key_constraint: "a non-empty keyword made of letters only",
        example: "HELLO → TMYPA (keyword MINE)",
    },
];

/// Key material as supplied by a caller, before cipher-specific validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Integer(i64),
    Text(String),
}

impl Key {
    fn as_integer(&self, cipher: CipherId) -> Result<i64> {
        match self {
            Key::Integer(n) => Ok(*n),
            Key::Text(text) => text.trim().parse().map_err(|_| {
                CipherError::invalid_key(
                    cipher.display_name(),
                    format!("`{text}` is not an integer"),
                )
            }),
        }
    }

    fn as_text(&self) -> String {
        match self {
            Key::Integer(n) => n.to_string(),
            Key::Text(text) => text.clone(),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Integer(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Text(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Text(value)
    }
}

/// A cipher bound to a validated key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cipher {
    Affine(AffineKey),
    Atbash,
    Base64,
    Binary,
    Caesar(u8),
    Hex,
    Morse,
    RailFence(usize),
    Rot13,
    Vigenere(Vec<u8>),
}

impl Cipher {
    /// Validates `key` against the rules of `id`. Keys passed to keyless
    /// ciphers are ignored, and a rail fence without a key is a single rail.
    pub fn new(id: CipherId, key: Option<&Key>) -> Result<Self> {
        let required = || {
            key.ok_or_else(|| CipherError::invalid_key(id.display_name(), "a key is required"))
        };

        Ok(match id {
            CipherId::Affine => Cipher::Affine(AffineKey::parse(&required()?.as_text())?),
            CipherId::Caesar => Cipher::Caesar(caesar::reduce_shift(required()?.as_integer(id)?)),
            CipherId::RailFence => match key {
                Some(key) => Cipher::RailFence(rail_fence::validate_rails(key.as_integer(id)?)?),
                None => Cipher::RailFence(1),
            },
            CipherId::Vigenere => Cipher::Vigenere(vigenere::parse_keyword(&required()?.as_text())?),
            CipherId::Atbash => Cipher::Atbash,
            CipherId::Base64 => Cipher::Base64,
            CipherId::Binary => Cipher::Binary,
            CipherId::Hex => Cipher::Hex,
            CipherId::Morse => Cipher::Morse,
            CipherId::Rot13 => Cipher::Rot13,
        })
    }

    pub fn id(&self) -> CipherId {
        match self {
            Cipher::Affine(_) => CipherId::Affine,
            Cipher::Atbash => CipherId::Atbash,
            Cipher::Base64 => CipherId::Base64,
            Cipher::Binary => CipherId::Binary,
            Cipher::Caesar(_) => CipherId::Caesar,
            Cipher::Hex => CipherId::Hex,
            Cipher::Morse => CipherId::Morse,
            Cipher::RailFence(_) => CipherId::RailFence,
            Cipher::Rot13 => CipherId::Rot13,
            Cipher::Vigenere(_) => CipherId::Vigenere,
        }
    }

    pub fn encode(&self, text: &str) -> String {
        match self {
            Cipher::Affine(key) => affine::encode(text, key),
            Cipher::Atbash => atbash::apply(text),
            Cipher::Base64 => base64::encode(text),
            Cipher::Binary => binary::encode(text),
            Cipher::Caesar(shift) => caesar::encode(text, *shift),
            Cipher::Hex => hex::encode(text),
            Cipher::Morse => morse::encode(text),
            Cipher::RailFence(rails) => rail_fence::encode(text, *rails),
            Cipher::Rot13 => caesar::rot13(text),
            Cipher::Vigenere(shifts) => vigenere::encode(text, shifts),
        }
    }

    /// Only the byte-oriented encodings can fail here, on malformed input.
    pub fn decode(&self, text: &str) -> Result<String> {
        Ok(match self {
            Cipher::Affine(key) => affine::decode(text, key),
            Cipher::Atbash => atbash::apply(text),
            Cipher::Base64 => base64::decode(text)?,
            Cipher::Binary => binary::decode(text)?,
            Cipher::Caesar(shift) => caesar::decode(text, *shift),
            Cipher::Hex => hex::decode(text)?,
            Cipher::Morse => morse::decode(text),
            Cipher::RailFence(rails) => rail_fence::decode(text, *rails),
            Cipher::Rot13 => caesar::rot13(text),
            Cipher::Vigenere(shifts) => vigenere::decode(text, shifts),
        })
    }
}

pub fn encode(cipher_id: &str, text: &str, key: Option<&Key>) -> Result<String> {
    let id: CipherId = cipher_id.parse()?;
    Ok(Cipher::new(id, key)?.encode(text))
}

pub fn decode(cipher_id: &str, text: &str, key: Option<&Key>) -> Result<String> {
    let id: CipherId = cipher_id.parse()?;
    Cipher::new(id, key)?.decode(text)
}

/// Rewrites every ASCII letter through `f`, which receives and returns an
/// alphabet position in `0..26`. Case is kept; other characters pass through.
pub(crate) fn map_letters(text: &str, mut f: impl FnMut(u8) -> u8) -> String {
    text.chars()
        .map(|c| {
            let start = match c {
                'A'..='Z' => b'A',
                'a'..='z' => b'a',
                _ => return c,
            };
            (start + f(c as u8 - start) % 26) as char
        })
        .collect()
}
