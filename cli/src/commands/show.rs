//! The item detail view: one record's fields, single-record CSV
//! export, and a QR code for the shareable item URL.

use anyhow::Result;
use depot::csv;
use depot::storage::Device;
use qrcode::render::unicode;
use qrcode::QrCode;

use crate::config::ClientConfig;

fn render_details(device: &Device) -> String {
    format!(
        "Serial Number: {}\n\
         OS:            {}\n\
         Vendor:        {}\n\
         Device Name:   {}\n\
         Size:          {}\n\
         CPU:           {}\n\
         Condition:     {}\n\
         Location:      {}\n\
         MAC Address:   {}\n",
        device.serial_number,
        device.os,
        device.vendor,
        device.device_name,
        device.size,
        device.cpu,
        device.condit,
        device.location,
        device.mac_address,
    )
}

fn share_qr(url: &str) -> Result<String> {
    let code = QrCode::new(url.as_bytes())?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .quiet_zone(true)
        .build())
}

pub fn run(config: &ClientConfig, id: i32, as_csv: bool, with_qr: bool) -> Result<()> {
    let device = super::fetch_device(config, id)?;

    if as_csv {
        println!("{}", csv::device_row(&device));
        return Ok(());
    }

    print!("{}", render_details(&device));

    if with_qr {
        let url = config.item_url(device.id);
        println!("\nShare via QR code ({url}):");
        println!("{}", share_qr(&url)?);
    }
    Ok(())
}
