mod json;
mod template;

pub use json::JsonEncoder;
pub use template::TemplateEncoder;

use crate::device::Device;

/// Encoder failure. The fixed template cannot fail; this exists for
/// structured encoders.
#[derive(Debug, thiserror::Error)]
#[error("encoding record: {0}")]
pub struct EncodeError(#[from] pub serde_json::Error);

/// Trait for encoding a device record into the exact bytes that get signed.
///
/// Encodings are versioned by `name()` — a verifier must reproduce the
/// byte output of the encoder named in its contract, so an encoder's
/// output is frozen once deployed.
pub trait RecordEncoder: Send + Sync {
    /// Produce the canonical signing bytes for a record.
    fn encode(&self, device: &Device) -> Result<Vec<u8>, EncodeError>;

    /// Encoding name (e.g. "template", "json").
    fn name(&self) -> &str;
}
