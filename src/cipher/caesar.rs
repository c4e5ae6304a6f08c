use super::map_letters;

pub(super) fn reduce_shift(shift: i64) -> u8 {
    shift.rem_euclid(26) as u8
}

pub(super) fn encode(text: &str, shift: u8) -> String {
    map_letters(text, |c| c + shift)
}

pub(super) fn decode(text: &str, shift: u8) -> String {
    map_letters(text, |c| c + 26 - shift)
}

/// ROT13 is a Caesar shift of half the alphabet, so it is its own inverse.
pub(super) fn rot13(text: &str) -> String {
    encode(text, 13)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_wraps() {
        assert_eq!(encode("xyz", 3), "abc");
        assert_eq!(decode("abc", 3), "xyz");
    }

    #[test]
    fn test_shift_reduction() {
        assert_eq!(reduce_shift(29), 3);
        assert_eq!(reduce_shift(-1), 25);
        assert_eq!(reduce_shift(-27), 25);
    }

    #[test]
    fn test_negative_shift_matches_decode() {
        assert_eq!(encode("HELLO", reduce_shift(-3)), decode("HELLO", 3));
    }

    #[test]
    fn test_rot13() {
        assert_eq!(rot13("Hello, World!"), "Uryyb, Jbeyq!");
        assert_eq!(rot13(&rot13("Hello, World!")), "Hello, World!");
    }
}
