use super::{map_letters, Result};
use crate::CipherError;

const NAME: &str = "Affine Cipher";

/// Validated `(a, b)` pair, with `a` reduced modulo 26 and its inverse cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffineKey {
    a: u8,
    b: u8,
    a_inv: u8,
}

impl AffineKey {
    pub fn new(a: i64, b: i64) -> Result<Self> {
        let reduced = a.rem_euclid(26) as u8;
        let a_inv = mod_inverse(reduced).ok_or_else(|| {
            CipherError::invalid_key(NAME, format!("`a` must be coprime with 26, got {a}"))
        })?;
        Ok(Self {
            a: reduced,
            b: b.rem_euclid(26) as u8,
            a_inv,
        })
    }

    /// Parses the `a,b` form.
    pub fn parse(key: &str) -> Result<Self> {
        let malformed =
            || CipherError::invalid_key(NAME, format!("expected the form `a,b`, got `{key}`"));

        let (a, b) = key.split_once(',').ok_or_else(malformed)?;
        let a = a.trim().parse().map_err(|_| malformed())?;
        let b = b.trim().parse().map_err(|_| malformed())?;
        Self::new(a, b)
    }

    pub fn a(&self) -> u8 {
        self.a
    }

    pub fn b(&self) -> u8 {
        self.b
    }
}

fn mod_inverse(a: u8) -> Option<u8> {
    (1..26u8).find(|&i| (a as u16 * i as u16) % 26 == 1)
}

pub(super) fn encode(text: &str, key: &AffineKey) -> String {
    map_letters(text, |c| ((key.a as u16 * c as u16 + key.b as u16) % 26) as u8)
}

pub(super) fn decode(text: &str, key: &AffineKey) -> String {
    map_letters(text, |c| {
        ((key.a_inv as u16 * (c as u16 + 26 - key.b as u16)) % 26) as u8
    })
}
