use std::path::PathBuf;

use anyhow::Result;
use attestor_client::AttestorClient;
use clap::{Parser, Subcommand};
use device_attestor::Device;

#[derive(Parser)]
struct Args {
    #[clap(long, default_value = "http://127.0.0.1:8080")]
    url: String,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Save a device record.
    Save {
        #[clap(long)]
        serial_number: String,
        #[clap(long)]
        port_number: String,
    },
    /// Fetch base64 signatures for every saved device.
    Signatures {
        /// Write one signature per line to this file instead of stdout.
        #[clap(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = AttestorClient::new(&args.url);

    match args.command {
        Command::Save {
            serial_number,
            port_number,
        } => {
            let saved = client
                .save_device(&Device::new(serial_number, port_number))
                .await?;
            println!("Saved device {}", saved.id.unwrap_or_default());
        }
        Command::Signatures { out } => {
            let signatures = client.device_signatures().await?;
            let mut text = signatures.join("\n");
            text.push('\n');
            match out {
                Some(path) => {
                    std::fs::write(&path, text)?;
                    println!(
                        "Wrote {} signatures to {}",
                        signatures.len(),
                        path.display()
                    );
                }
                None => print!("{text}"),
            }
        }
    }

    Ok(())
}
