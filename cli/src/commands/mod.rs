pub mod add;
pub mod list;
pub mod show;

use anyhow::Result;
use depot::storage::Device;

use crate::config::ClientConfig;

/// GET /devices
pub fn fetch_devices(config: &ClientConfig) -> Result<Vec<Device>> {
    let resp = reqwest::blocking::get(format!("{}/devices", config.base_url))?;
    let status = resp.status();
    if !status.is_success() {
        anyhow::bail!("Error fetching devices: {}", status);
    }
    Ok(resp.json()?)
}

/// GET /devices/{id}
pub fn fetch_device(config: &ClientConfig, id: i32) -> Result<Device> {
    let resp = reqwest::blocking::get(format!("{}/devices/{}", config.base_url, id))?;
    let status = resp.status();
    if !status.is_success() {
        let body: serde_json::Value = resp.json().unwrap_or_default();
        let error = body["error"].as_str().unwrap_or("unknown error");
        anyhow::bail!("Error fetching device {}: {} ({})", id, error, status);
    }
    Ok(resp.json()?)
}
