use serde::Serialize;

use crate::device::Device;

use super::{EncodeError, RecordEncoder};

/// Properly escaped JSON encoding of the two signed fields, in the same
/// order as the template.
///
/// Opt-in alternative to [`TemplateEncoder`] for deployments whose
/// verifiers use a real JSON serializer. Output matches the template
/// byte-for-byte whenever values contain no characters that need
/// escaping; the two encodings are otherwise incompatible and must not
/// be mixed against the same verifier.
///
/// [`TemplateEncoder`]: super::TemplateEncoder
pub struct JsonEncoder;

/// The signed subset of a record. Field order is part of the contract.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignedFields<'a> {
    serial_number: &'a str,
    port_number: &'a str,
}

impl RecordEncoder for JsonEncoder {
    fn encode(&self, device: &Device) -> Result<Vec<u8>, EncodeError> {
        let fields = SignedFields {
            serial_number: &device.serial_number,
            port_number: &device.port_number,
        };
        Ok(serde_json::to_vec(&fields)?)
    }

    fn name(&self) -> &str {
        "json"
    }
}
