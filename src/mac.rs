//! MAC address formatting and validation. Both are advisory helpers
//! for the entry form; the server never enforces the canonical form.

/// Normalize free-text MAC input into `AA:BB:CC:DD:EE:FF`.
///
/// Every non-hex character is stripped; if exactly 12 hex digits
/// remain, they are grouped in pairs, colon-joined, and uppercased.
/// Anything else (partial input mid-keystroke, junk) is returned
/// verbatim so the user can keep typing.
pub fn format(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| c.is_ascii_hexdigit()).collect();

    if cleaned.len() != 12 {
        return raw.to_string();
    }

    cleaned
        .to_uppercase()
        .as_bytes()
        .chunks(2)
        .map(|pair| std::str::from_utf8(pair).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(":")
}

/// True iff the value is exactly six 2-hex-digit groups separated by
/// `:` or `-`.
pub fn validate(value: &str) -> bool {
    let mut groups = 0;
    for group in value.split([':', '-']) {
        if group.len() != 2 || !group.chars().all(|c| c.is_ascii_hexdigit()) {
            return false;
        }
        groups += 1;
    }
    groups == 6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_bare_hex() {
        assert_eq!(format("001b44113ab7"), "00:1B:44:11:3A:B7");
    }

    #[test]
    fn test_format_strips_punctuation_noise() {
        assert_eq!(format("00-1b-44-11-3a-b7"), "00:1B:44:11:3A:B7");
        assert_eq!(format("00.1b.44 11 3a:b7"), "00:1B:44:11:3A:B7");
    }

    #[test]
    fn test_format_preserves_partial_input() {
        // Fewer than 12 hex digits: the user is still typing.
        assert_eq!(format("001b44"), "001b44");
        assert_eq!(format(""), "");
    }

    #[test]
    fn test_format_preserves_overlong_input() {
        assert_eq!(format("001b44113ab7ff"), "001b44113ab7ff");
    }

    #[test]
    fn test_validate_accepts_canonical_forms() {
        assert!(validate("AA:BB:CC:DD:EE:FF"));
        assert!(validate("aa-bb-cc-dd-ee-ff"));
    }

    #[test]
    fn test_validate_rejects_short() {
        assert!(!validate("AA:BB:CC:DD:EE"));
    }

    #[test]
    fn test_validate_rejects_non_hex() {
        assert!(!validate("GG:BB:CC:DD:EE:FF"));
    }

    #[test]
    fn test_validate_rejects_empty_and_unseparated() {
        assert!(!validate(""));
        assert!(!validate("AABBCCDDEEFF"));
    }
}
