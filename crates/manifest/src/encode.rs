//! Percent-encoding for manifest retrieval paths
//!
//! The proxy fetches each file through the encoded path, so the encoding
//! must survive a URL component byte-for-byte: spaces, `+`, `?`, brackets
//! and the separator itself are all escaped. Only the URL-unreserved set
//! (`A-Z a-z 0-9 - _ . ~`) passes through.

use anyhow::{anyhow, Result};

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encode a path for use as a manifest retrieval path.
///
/// Every byte outside the unreserved set is rendered as an uppercase `%XX`
/// escape, including `/` (`%2F`); the proxy decodes the full component
/// before resolving it.
pub fn encode(path: &str) -> String {
    let mut encoded = String::with_capacity(path.len());
    for &byte in path.as_bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push('%');
                encoded.push(HEX_UPPER[(byte >> 4) as usize] as char);
                encoded.push(HEX_UPPER[(byte & 0xf) as usize] as char);
            }
        }
    }
    encoded
}

/// Decode a percent-encoded path produced by [`encode`].
///
/// Fails on truncated or non-hex escapes and on escape sequences that do
/// not decode to valid UTF-8.
pub fn decode(input: &str) -> Result<String> {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut index = 0;

    while index < bytes.len() {
        if bytes[index] == b'%' {
            if index + 2 >= bytes.len() {
                return Err(anyhow!("truncated percent escape in {input}"));
            }
            match (hex_value(bytes[index + 1]), hex_value(bytes[index + 2])) {
                (Some(hi), Some(lo)) => {
                    decoded.push((hi << 4) | lo);
                    index += 3;
                }
                _ => return Err(anyhow!("invalid percent escape in {input}")),
            }
        } else {
            decoded.push(bytes[index]);
            index += 1;
        }
    }

    String::from_utf8(decoded).map_err(|_| anyhow!("decoded path is not valid UTF-8: {input}"))
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved_bytes_pass_through() {
        assert_eq!(encode("filename-without-a-dot"), "filename-without-a-dot");
        assert_eq!(encode("my_file.txt"), "my_file.txt");
        assert_eq!(encode("~tilde"), "~tilde");
    }

    #[test]
    fn test_reserved_bytes_are_escaped_uppercase() {
        assert_eq!(encode("/"), "%2F");
        assert_eq!(encode(" "), "%20");
        assert_eq!(encode("+"), "%2B");
        assert_eq!(encode("?"), "%3F");
        assert_eq!(encode("[brackets]"), "%5Bbrackets%5D");
        assert_eq!(encode("(parenthesis)"), "%28parenthesis%29");
    }

    #[test]
    fn test_full_path_encoding() {
        assert_eq!(
            encode("/data/c/[brackets]/(parenthesis).txt"),
            "%2Fdata%2Fc%2F%5Bbrackets%5D%2F%28parenthesis%29.txt"
        );
        assert_eq!(
            encode("/data/a/A filename with whitespace.txt"),
            "%2Fdata%2Fa%2FA%20filename%20with%20whitespace.txt"
        );
    }

    #[test]
    fn test_round_trip() -> Result<()> {
        let paths = [
            "/data/a/A filename with space and + in it.txt",
            "/data/c/questions?/test.txt",
            "/data/c/[brackets]/(parenthesis).txt",
            "/data/übergröße.bin",
        ];
        for path in paths {
            assert_eq!(decode(&encode(path))?, path);
        }
        Ok(())
    }

    #[test]
    fn test_decode_rejects_truncated_escape() {
        assert!(decode("%2").is_err());
        assert!(decode("abc%").is_err());
    }

    #[test]
    fn test_decode_rejects_non_hex_escape() {
        assert!(decode("%zz").is_err());
    }

    #[test]
    fn test_decode_plain_string_is_identity() -> Result<()> {
        assert_eq!(decode("lorem.txt")?, "lorem.txt");
        Ok(())
    }
}
