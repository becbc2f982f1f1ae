//! Character-encoding decode cascades.
//!
//! Plain text and CSV use the short cascade (UTF-8, then Latin-1); source
//! code uses the wider one (UTF-8, UTF-8 with BOM, Latin-1, Windows-1252).
//! Every tier is strict except Latin-1, which accepts all byte values, so
//! the terminal replacement tier can only be reached if the cascade is ever
//! reordered. It stays in place to keep the cascade contract explicit.

use tracing::warn;

/// One strict decoding attempt in a cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// Strict UTF-8.
    Utf8,
    /// Strict UTF-8 with a leading byte-order mark. Only applies when the
    /// BOM is actually present.
    Utf8Sig,
    /// ISO-8859-1. Total: every byte maps to the code point of its value.
    Latin1,
    /// Strict Windows-1252. Fails on the five undefined code-page bytes.
    Windows1252,
}

impl Codec {
    /// Attempt a strict decode; `None` means this tier rejects the bytes.
    fn try_decode(self, content: &[u8]) -> Option<String> {
        match self {
            Codec::Utf8 => std::str::from_utf8(content).ok().map(str::to_owned),
            Codec::Utf8Sig => content
                .strip_prefix(b"\xef\xbb\xbf")
                .and_then(|rest| std::str::from_utf8(rest).ok())
                .map(str::to_owned),
            Codec::Latin1 => Some(content.iter().map(|&b| char::from(b)).collect()),
            Codec::Windows1252 => encoding_rs::WINDOWS_1252
                .decode_without_bom_handling_and_without_replacement(content)
                .map(|cow| cow.into_owned()),
        }
    }
}

/// Cascade for plain text and CSV content.
pub const TEXT_CASCADE: &[Codec] = &[Codec::Utf8, Codec::Latin1];

/// Cascade for source-code content.
pub const CODE_CASCADE: &[Codec] = &[
    Codec::Utf8,
    Codec::Utf8Sig,
    Codec::Latin1,
    Codec::Windows1252,
];

/// Decode bytes through an ordered cascade of strict attempts, falling back
/// to UTF-8 with replacement characters (plus a warning) when every tier
/// rejects the input.
pub fn decode_with_cascade(content: &[u8], cascade: &[Codec], label: &str, file_name: &str) -> String {
    for codec in cascade {
        if let Some(text) = codec.try_decode(content) {
            return text;
        }
    }

    warn!(
        "Could not decode {} {} with any cascade encoding; using replacement characters",
        label, file_name
    );
    String::from_utf8_lossy(content).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin1_bytes(s: &str) -> Vec<u8> {
        s.chars().map(|c| c as u8).collect()
    }

    #[test]
    fn test_utf8_round_trip() {
        let s = "Hello 世界 🌍 with accents éàç";
        let decoded = decode_with_cascade(s.as_bytes(), TEXT_CASCADE, "text file", "t.txt");
        assert_eq!(decoded, s);
    }

    #[test]
    fn test_latin1_round_trip() {
        let s = "café crème ±§°";
        let bytes = latin1_bytes(s);
        assert!(std::str::from_utf8(&bytes).is_err());
        let decoded = decode_with_cascade(&bytes, TEXT_CASCADE, "text file", "t.txt");
        assert_eq!(decoded, s);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode_with_cascade(b"", TEXT_CASCADE, "text file", "t.txt"), "");
    }

    #[test]
    fn test_code_cascade_strips_bom() {
        let mut bytes = b"\xef\xbb\xbf".to_vec();
        bytes.extend_from_slice("let x = 1;".as_bytes());
        // Strict UTF-8 succeeds with the BOM as U+FEFF; the cascade keeps it.
        let decoded = decode_with_cascade(&bytes, CODE_CASCADE, "code file", "x.rs");
        assert!(decoded.ends_with("let x = 1;"));

        // A BOM followed by invalid UTF-8 falls through to Utf8Sig, then
        // Latin-1 - the cascade never fails outright.
        let mut broken = b"\xef\xbb\xbf".to_vec();
        broken.push(0xe9);
        let decoded = decode_with_cascade(&broken, CODE_CASCADE, "code file", "x.rs");
        assert!(!decoded.is_empty());
    }

    #[test]
    fn test_utf8_sig_tier_decodes_bom_prefixed_utf8() {
        let mut bytes = b"\xef\xbb\xbf".to_vec();
        bytes.extend_from_slice("fn main() {}".as_bytes());
        assert_eq!(Codec::Utf8Sig.try_decode(&bytes).unwrap(), "fn main() {}");
        assert!(Codec::Utf8Sig.try_decode(b"no bom here").is_none());
    }

    #[test]
    fn test_latin1_is_total() {
        let all_bytes: Vec<u8> = (0u8..=255).collect();
        let decoded = Codec::Latin1.try_decode(&all_bytes).unwrap();
        assert_eq!(decoded.chars().count(), 256);
        assert_eq!(decoded.chars().last(), Some('ÿ'));
    }

    #[test]
    fn test_windows1252_rejects_undefined_bytes() {
        // 0x81 is undefined in Windows-1252.
        assert!(Codec::Windows1252.try_decode(b"\x81").is_none());
        // 0x93/0x94 are the curly quotes.
        assert_eq!(
            Codec::Windows1252.try_decode(b"\x93quoted\x94").unwrap(),
            "\u{201c}quoted\u{201d}"
        );
    }

    #[test]
    fn test_code_cascade_order() {
        assert_eq!(
            CODE_CASCADE,
            [Codec::Utf8, Codec::Utf8Sig, Codec::Latin1, Codec::Windows1252]
        );
        assert_eq!(TEXT_CASCADE, [Codec::Utf8, Codec::Latin1]);
    }
}
