use super::Result;
use crate::CipherError;

const NAME: &str = "Hexadecimal Encoding";

pub(super) fn encode(text: &str) -> String {
    hex::encode_upper(text)
}

pub(super) fn decode(text: &str) -> Result<String> {
    let bytes = hex::decode(text.trim()).map_err(|e| CipherError::format(NAME, e.to_string()))?;
    String::from_utf8(bytes)
        .map_err(|_| CipherError::format(NAME, "decoded bytes are not valid UTF-8"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uppercase() {
        assert_eq!(encode("HELLO"), "48454C4C4F");
        assert_eq!(encode("\n"), "0A");
        assert_eq!(encode(""), "");
    }

    #[test]
    fn test_decode_accepts_lowercase() {
        assert_eq!(decode("48656c6c6f").unwrap(), "Hello");
        assert_eq!(decode(" 4849\n").unwrap(), "HI");
    }

    #[test]
    fn test_odd_length() {
        let err = decode("48454").unwrap_err();
        assert!(matches!(err, CipherError::Format { cipher: NAME, .. }));
        assert!(err.to_string().starts_with("Invalid Hexadecimal Encoding input: "));
    }

    #[test]
    fn test_non_hex_digit() {
        assert!(matches!(decode("4G"), Err(CipherError::Format { .. })));
        assert!(matches!(decode("+F"), Err(CipherError::Format { .. })));
    }

    #[test]
    fn test_invalid_utf8() {
        assert_eq!(
            decode("FF").unwrap_err().to_string(),
            "Invalid Hexadecimal Encoding input: decoded bytes are not valid UTF-8"
        );
    }
}
