pub mod device;
pub mod encoding;
pub mod error;
pub mod server;
pub mod signing;
pub mod store;

pub use device::Device;
pub use encoding::{JsonEncoder, RecordEncoder, TemplateEncoder};
pub use error::AttestorServerError;
pub use server::{AppState, router, run};
pub use signing::{
    BatchOutcome, KeyProvider, RecordSigner, RsaRecordSigner, SigningEngine,
};
pub use store::{DeviceStore, InMemoryDeviceStore};
