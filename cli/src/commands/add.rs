//! The entry form: collect fields, auto-fill vendor/OS from the serial
//! or MAC prefix, normalize the MAC, and POST the record.

use anyhow::Result;
use depot::storage::NewDevice;
use depot::{autofill, mac};

use crate::config::ClientConfig;

#[derive(Debug)]
pub struct FormInput {
    pub serial_number: String,
    pub os: String,
    pub vendor: String,
    pub device_name: String,
    pub size: String,
    pub cpu: String,
    pub condition: String,
    pub location: String,
    pub mac: String,
}

pub fn print_serial_help() {
    println!(
        "If the device is operating on Windows, open cmd and type in \
         `wmic bios get serialnumber`. If the device is operating on \
         macOS, go to the Apple menu > About This Mac. If the device is \
         operating on ChromeOS, press ALT + V on the Sign-In screen."
    );
}

/// Fill empty vendor/OS fields from the lookup table and canonicalize
/// the MAC. Explicitly typed values are never overwritten.
fn prepare(input: FormInput) -> NewDevice {
    let mac_address = mac::format(&input.mac);

    let mut vendor = input.vendor;
    let mut os = input.os;
    if vendor.is_empty() || os.is_empty() {
        if let Some(hit) = autofill::resolve(
            Some(input.serial_number.as_str()).filter(|s| !s.is_empty()),
            Some(mac_address.as_str()).filter(|m| !m.is_empty()),
        ) {
            if vendor.is_empty() {
                vendor = hit.vendor.to_string();
            }
            if os.is_empty() {
                os = hit.os.to_string();
            }
        }
    }

    NewDevice {
        serial_number: input.serial_number,
        os,
        vendor,
        device_name: input.device_name,
        size: input.size,
        cpu: input.cpu,
        condit: input.condition,
        location: input.location,
        mac_address,
    }
}

pub fn run(config: &ClientConfig, input: FormInput) -> Result<()> {
    let device = prepare(input);

    // Advisory only: an odd MAC gets a warning but is submitted as-is.
    if !device.mac_address.is_empty() && !mac::validate(&device.mac_address) {
        eprintln!(
            "Warning: \"{}\" does not look like a MAC address (expected AA:BB:CC:DD:EE:FF)",
            device.mac_address
        );
    }

    let client = reqwest::blocking::Client::new();
    let resp = client
        .post(format!("{}/devices", config.base_url))
        .json(&device)
        .send()?;
    let status = resp.status();
    let body: serde_json::Value = resp.json()?;

    if !status.is_success() {
        let error = body["error"].as_str().unwrap_or("unknown error");
        anyhow::bail!("Error adding device: {} ({})", error, status);
    }

    match body["device"]["id"].as_i64() {
        Some(id) => println!("Device added successfully (id {})", id),
        None => println!("Device added successfully"),
    }
    Ok(())
}
