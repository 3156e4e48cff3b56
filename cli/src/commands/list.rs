//! The inventory list: fetch everything, sort and paginate in memory,
//! render a table or export CSV, and delete rows.

use anyhow::Result;
use depot::csv;
use depot::storage::Device;

use crate::config::ClientConfig;

const COLUMNS: &[&str] = &[
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

fn field(device: &Device, column: &str) -> String {
    match column {
        "id" => device.id.to_string(),
        "serial_number" => device.serial_number.clone(),
        "os" => device.os.clone(),
        "vendor" => device.vendor.clone(),
        "device_name" => device.device_name.clone(),
        "size" => device.size.clone(),
        "cpu" => device.cpu.clone(),
        "condit" => device.condit.clone(),
        "location" => device.location.clone(),
        "mac_address" => device.mac_address.clone(),
        _ => String::new(),
    }
}

fn sort_devices(devices: &mut [Device], column: &str) -> Result<()> {
    if !COLUMNS.contains(&column) {
        anyhow::bail!(
            "Unknown sort field \"{}\" (expected one of: {})",
            column,
            COLUMNS.join(", ")
        );
    }
    if column == "id" {
        devices.sort_by_key(|d| d.id);
    } else {
        devices.sort_by(|a, b| field(a, column).cmp(&field(b, column)));
    }
    Ok(())
}

/// The requested page, 1-based. An out-of-range page is just empty.
fn paginate(devices: &[Device], page: usize, page_size: usize) -> &[Device] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= devices.len() || page_size == 0 {
        return &[];
    }
    let end = (start + page_size).min(devices.len());
    &devices[start..end]
}

fn render_table(devices: &[Device]) -> String {
    let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.len()).collect();
    let rows: Vec<Vec<String>> = devices
        .iter()
        .map(|d| COLUMNS.iter().map(|c| field(d, c)).collect())
        .collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    for (i, column) in COLUMNS.iter().enumerate() {
        out.push_str(&format!("{:<width$}  ", column, width = widths[i]));
    }
    out.push('\n');
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            out.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
        }
        out.push('\n');
    }
    out
}

pub fn run(
    config: &ClientConfig,
    sort: Option<&str>,
    page: usize,
    page_size: usize,
    as_csv: bool,
) -> Result<()> {
    let mut devices = super::fetch_devices(config)?;

    if as_csv {
        // CSV export covers every row, ignoring pagination.
        print!("{}", csv::inventory(&devices));
        return Ok(());
    }

    if let Some(column) = sort {
        sort_devices(&mut devices, column)?;
    }

    let page_rows = paginate(&devices, page, page_size);
    print!("{}", render_table(page_rows));
    if devices.len() > page_rows.len() {
        println!(
            "({} of {} devices, page {})",
            page_rows.len(),
            devices.len(),
            page
        );
    }
    Ok(())
}

/// DELETE /devices/{id}
pub fn delete(config: &ClientConfig, id: i32) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let resp = client
        .delete(format!("{}/devices/{}", config.base_url, id))
        .send()?;
    let status = resp.status();
    let body: serde_json::Value = resp.json()?;

    if !status.is_success() {
        let error = body["error"].as_str().unwrap_or("unknown error");
        anyhow::bail!("Error deleting device {}: {} ({})", id, error, status);
    }

    println!(
        "{}",
        body["message"].as_str().unwrap_or("Device deleted successfully")
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(id: i32, serial: &str, vendor: &str) -> Device {
        Device {
            id,
            serial_number: serial.to_string(),
            os: String::new(),
            vendor: vendor.to_string(),
            device_name: String::new(),
            size: String::new(),
            cpu: String::new(),
            condit: String::new(),
            location: String::new(),
            mac_address: String::new(),
        }
    }

    #[test]
    fn test_sort_by_vendor() {
        let mut devices = vec![
            device(1, "LT1", "Lenovo"),
            device(2, "DL1", "Dell"),
            device(3, "HP1", "HP"),
        ];
        sort_devices(&mut devices, "vendor").unwrap();
        let vendors: Vec<_> = devices.iter().map(|d| d.vendor.as_str()).collect();
        assert_eq!(vendors, ["Dell", "HP", "Lenovo"]);
    }

    #[test]
    fn test_sort_unknown_field() {
        let mut devices = vec![device(1, "A", "B")];
        assert!(sort_devices(&mut devices, "price").is_err());
    }

    #[test]
    fn test_paginate() {
        let devices: Vec<Device> = (1..=5).map(|i| device(i, "S", "V")).collect();
        assert_eq!(paginate(&devices, 1, 2).len(), 2);
        assert_eq!(paginate(&devices, 3, 2).len(), 1);
        assert!(paginate(&devices, 4, 2).is_empty());
        assert!(paginate(&devices, 1, 0).is_empty());
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let out = render_table(&[device(1, "DL99871", "Dell")]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("serial_number"));
        assert!(lines[1].contains("DL99871"));
    }
}
