//! `depot-cli` — the Depot inventory client.
//!
//! Three views over the REST API: the entry form (`add`), the
//! inventory list (`list`/`delete`), and the item detail (`show`).

mod commands;
mod config;

use clap::{Parser, Subcommand};

/// Depot CLI client.
#[derive(Parser, Debug)]
#[command(name = "depot-cli", version, about = "Device inventory client")]
struct Cli {
    /// API base URL (overrides DEPOT_BASE_URL).
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Register a device (the entry form).
    Add {
        #[arg(long, default_value = "")]
        serial_number: String,
        #[arg(long, default_value = "")]
        os: String,
        #[arg(long, default_value = "")]
        vendor: String,
        #[arg(long, default_value = "")]
        device_name: String,
        #[arg(long, default_value = "")]
        size: String,
        #[arg(long, default_value = "")]
        cpu: String,
        /// Device condition.
        #[arg(long, default_value = "")]
        condition: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long, default_value = "")]
        mac: String,
        /// Print where to find a serial number and exit.
        #[arg(long)]
        serial_help: bool,
    },

    /// List the inventory.
    List {
        /// Sort by a field (serial_number, os, vendor, device_name,
        /// size, cpu, condit, location). Default: newest first.
        #[arg(long)]
        sort: Option<String>,
        /// Page number, 1-based.
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long, default_value_t = 20)]
        page_size: usize,
        /// Emit all rows as CSV instead of a table.
        #[arg(long)]
        csv: bool,
    },

    /// Delete a device by id.
    Delete {
        id: i32,
    },

    /// Show one device in detail.
    Show {
        id: i32,
        /// Emit the record as CSV.
        #[arg(long)]
        csv: bool,
        /// Print a QR code for the shareable item URL.
        #[arg(long)]
        qr: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = config::ClientConfig::from_env(cli.base_url);

    let result = match cli.command {
        Commands::Add {
            serial_number,
            os,
            vendor,
            device_name,
            size,
            cpu,
            condition,
            location,
            mac,
            serial_help,
        } => {
            if serial_help {
                commands::add::print_serial_help();
                return;
            }
            commands::add::run(
                &config,
                commands::add::FormInput {
                    serial_number,
                    os,
                    vendor,
                    device_name,
                    size,
                    cpu,
                    condition,
                    location,
                    mac,
                },
            )
        }
        Commands::List {
            sort,
            page,
            page_size,
            csv,
        } => commands::list::run(&config, sort.as_deref(), page, page_size, csv),
        Commands::Delete { id } => commands::list::delete(&config, id),
        Commands::Show { id, csv, qr } => commands::show::run(&config, id, csv, qr),
    };

    // A failed fetch is reported and leaves everything else untouched;
    // nothing is retried.
    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
