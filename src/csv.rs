//! CSV export of device records. A pure client-side transform: each
//! value is double-quoted (embedded quotes doubled) and comma-joined.

use crate::storage::Device;

const HEADER: &[&str] = &[
    "id",
    "serial_number",
    "os",
    "vendor",
    "device_name",
    "size",
    "cpu",
    "condit",
    "location",
    "mac_address",
];

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

pub fn header_row() -> String {
    HEADER.iter().map(|f| quote(f)).collect::<Vec<_>>().join(",")
}

/// One device as a single CSV row.
pub fn device_row(device: &Device) -> String {
    let id = device.id.to_string();
    [
        id.as_str(),
        &device.serial_number,
        &device.os,
        &device.vendor,
        &device.device_name,
        &device.size,
        &device.cpu,
        &device.condit,
        &device.location,
        &device.mac_address,
    ]
    .iter()
    .map(|v| quote(v))
    .collect::<Vec<_>>()
    .join(",")
}

/// Header plus every device, one row each, newline-terminated.
pub fn inventory(devices: &[Device]) -> String {
    let mut out = header_row();
    out.push('\n');
    for device in devices {
        out.push_str(&device_row(device));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Device {
        Device {
            id: 7,
            serial_number: "DL99871".to_string(),
            os: "Windows 11".to_string(),
            vendor: "Dell".to_string(),
            device_name: "Latitude".to_string(),
            size: "14\"".to_string(),
            cpu: "i5".to_string(),
            condit: "Good".to_string(),
            location: "Lab 2".to_string(),
            mac_address: "00:1B:44:11:3A:B7".to_string(),
        }
    }

    #[test]
    fn test_device_row_quotes_every_value() {
        let row = device_row(&sample());
        assert_eq!(
            row,
            "\"7\",\"DL99871\",\"Windows 11\",\"Dell\",\"Latitude\",\"14\"\"\",\"i5\",\"Good\",\"Lab 2\",\"00:1B:44:11:3A:B7\""
        );
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let mut device = sample();
        device.device_name = "the \"spare\" one".to_string();
        assert!(device_row(&device).contains("\"the \"\"spare\"\" one\""));
    }

    #[test]
    fn test_inventory_has_header_and_rows() {
        let out = inventory(&[sample()]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("\"id\",\"serial_number\""));
        assert!(lines[1].starts_with("\"7\","));
    }

    #[test]
    fn test_inventory_empty() {
        let out = inventory(&[]);
        assert_eq!(out.lines().count(), 1);
    }
}
