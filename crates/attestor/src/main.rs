use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use device_attestor::{
    AppState, InMemoryDeviceStore, JsonEncoder, RecordEncoder, SigningEngine, TemplateEncoder,
    run,
    signing::{FileKeySource, KeyProvider},
    store::DeviceStore,
};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, Clone, ValueEnum)]
enum RecordEncoding {
    /// Unescaped fixed-template encoding (wire-compatible default).
    Template,
    /// Escaped JSON encoding of the same two fields.
    Json,
}

#[derive(Parser)]
struct Args {
    #[clap(long, default_value = "127.0.0.1")]
    host: Option<String>,
    #[clap(long, default_value = "8080")]
    port: Option<u16>,
    /// Path to a PEM-encoded PKCS#8 RSA private key.
    #[clap(long, env = "SIGNING_KEY_FILE")]
    signing_key_file: PathBuf,
    #[clap(long, env = "RECORD_ENCODING", default_value = "template")]
    record_encoding: RecordEncoding,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let encoder: Arc<dyn RecordEncoder> = match args.record_encoding {
        RecordEncoding::Template => Arc::new(TemplateEncoder),
        RecordEncoding::Json => Arc::new(JsonEncoder),
    };

    let keys = KeyProvider::new(FileKeySource::new(args.signing_key_file));
    let engine = Arc::new(SigningEngine::new(keys, encoder));
    let store: Arc<dyn DeviceStore> = Arc::new(InMemoryDeviceStore::default());

    run(
        args.host.unwrap(),
        args.port.unwrap(),
        AppState { store, engine },
    )
    .await
    .unwrap();
}
