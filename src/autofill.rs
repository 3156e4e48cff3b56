//! Vendor lookup table and the auto-fill resolver used by the entry
//! form to pre-populate the vendor and OS fields from a serial number
//! or MAC address prefix.

/// One vendor's recognized prefixes and default OS.
#[derive(Debug)]
pub struct VendorEntry {
    pub vendor: &'static str,
    pub os: &'static str,
    pub serial_prefixes: &'static [&'static str],
    pub mac_prefixes: &'static [&'static str],
}

/// Static lookup table. Definition order matters: the resolver scans
/// top to bottom and the first match wins.
pub const VENDOR_TABLE: &[VendorEntry] = &[
    VendorEntry {
        vendor: "Dell",
        os: "Windows 11",
        serial_prefixes: &["DL", "DX", "DP", "DELL"],
        mac_prefixes: &["00:1B:44"],
    },
    VendorEntry {
        vendor: "Apple",
        os: "macOS",
        serial_prefixes: &["MBP", "MBA", "MAC", "MBP13", "MBP14"],
        mac_prefixes: &["00:1B:44"],
    },
    VendorEntry {
        vendor: "HP",
        os: "Windows 11",
        serial_prefixes: &["HP", "HE", "HC"],
        mac_prefixes: &["00:1B:44"],
    },
    VendorEntry {
        vendor: "Lenovo",
        os: "Windows 11",
        serial_prefixes: &["LENOVO", "LT", "LTX1", "LTT14"],
        mac_prefixes: &["00:1B:44"],
    },
];

/// The vendor/OS pair a successful lookup resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoFill {
    pub vendor: &'static str,
    pub os: &'static str,
}

/// Resolve a vendor/OS pair from a serial number and/or MAC address.
///
/// A serial-number prefix match always wins; the MAC address is only
/// consulted when the serial produced no match (or was not given). The
/// MAC comparison uses the first three octets of the canonical
/// colon-separated form, case-insensitively.
pub fn resolve(serial_number: Option<&str>, mac_address: Option<&str>) -> Option<AutoFill> {
    if let Some(serial) = serial_number.filter(|s| !s.is_empty()) {
        let serial = serial.to_uppercase();
        for entry in VENDOR_TABLE {
            if entry.serial_prefixes.iter().any(|p| serial.starts_with(p)) {
                return Some(AutoFill {
                    vendor: entry.vendor,
                    os: entry.os,
                });
            }
        }
    }

    if let Some(mac) = mac_address.filter(|m| m.chars().count() >= 8) {
        let oui: String = mac.chars().take(8).collect::<String>().to_uppercase();
        for entry in VENDOR_TABLE {
            if entry.mac_prefixes.iter().any(|p| p.to_uppercase() == oui) {
                return Some(AutoFill {
                    vendor: entry.vendor,
                    os: entry.os,
                });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_prefix_match() {
        let hit = resolve(Some("DL99871"), None).expect("Dell serial should match");
        assert_eq!(hit.vendor, "Dell");
        assert_eq!(hit.os, "Windows 11");
    }

    #[test]
    fn test_serial_match_is_case_insensitive() {
        let hit = resolve(Some("mbp13-2021"), None).expect("Apple serial should match");
        assert_eq!(hit.vendor, "Apple");
        assert_eq!(hit.os, "macOS");
    }

    #[test]
    fn test_serial_takes_precedence_over_mac() {
        // The MAC OUI belongs to the table too, but the serial match
        // must win without the MAC being consulted.
        let hit = resolve(Some("LT-X1-G11"), Some("00:1B:44:11:3A:B7")).unwrap();
        assert_eq!(hit.vendor, "Lenovo");
    }

    #[test]
    fn test_mac_only_match() {
        let hit = resolve(None, Some("00:1b:44:11:3a:b7")).expect("OUI should match");
        // First table entry carrying that OUI wins.
        assert_eq!(hit.vendor, "Dell");
    }

    #[test]
    fn test_unmatched_serial_falls_back_to_mac() {
        let hit = resolve(Some("ZZ-UNKNOWN"), Some("00:1B:44:11:3A:B7")).unwrap();
        assert_eq!(hit.vendor, "Dell");
    }

    #[test]
    fn test_no_inputs() {
        assert_eq!(resolve(None, None), None);
        assert_eq!(resolve(Some(""), Some("")), None);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(resolve(Some("XY123"), Some("AA:BB:CC:DD:EE:FF")), None);
    }

    #[test]
    fn test_table_order_decides_ties() {
        // "HP" and "HE" both belong to HP; a Lenovo "LT" serial must not
        // match Dell or Apple entries scanned before it.
        assert_eq!(resolve(Some("HE4410"), None).unwrap().vendor, "HP");
        assert_eq!(resolve(Some("LTT14-99"), None).unwrap().vendor, "Lenovo");
    }
}
