use crate::device::Device;

use super::{EncodeError, RecordEncoder};

/// Renders the fixed two-field object
/// `{"serialNumber":"<value>","portNumber":"<value>"}` with values
/// spliced in verbatim — no whitespace, no escaping.
///
/// This is the compatibility default. Verifiers must rebuild the
/// identical string by concatenation; a general JSON serializer diverges
/// whenever a value contains `"` or `\`. Do not change this output —
/// escaped encoding is available as the separate [`JsonEncoder`].
///
/// [`JsonEncoder`]: super::JsonEncoder
pub struct TemplateEncoder;

impl RecordEncoder for TemplateEncoder {
    fn encode(&self, device: &Device) -> Result<Vec<u8>, EncodeError> {
        let rendered = format!(
            "{{\"serialNumber\":\"{}\",\"portNumber\":\"{}\"}}",
            device.serial_number, device.port_number
        );
        Ok(rendered.into_bytes())
    }

    fn name(&self) -> &str {
        "template"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_canonical_bytes() {
        let encoded = TemplateEncoder
            .encode(&Device::new("SN123", "8080"))
            .unwrap();
        assert_eq!(encoded, br#"{"serialNumber":"SN123","portNumber":"8080"}"#);
    }

    #[test]
    fn id_is_not_part_of_the_encoding() {
        let unsaved = Device::new("SN123", "8080");
        let saved = Device {
            id: Some(42),
            ..unsaved.clone()
        };
        assert_eq!(
            TemplateEncoder.encode(&unsaved).unwrap(),
            TemplateEncoder.encode(&saved).unwrap(),
        );
    }

    #[test]
    fn values_are_spliced_verbatim() {
        let device = Device::new(r#"SN"quoted""#, "8080");
        let encoded = TemplateEncoder.encode(&device).unwrap();
        // Embedded quotes pass through unescaped. The result is not valid
        // JSON, which is the frozen contract.
        assert_eq!(
            encoded,
            br#"{"serialNumber":"SN"quoted"","portNumber":"8080"}"#
        );
    }

    #[test]
    fn name_is_template() {
        assert_eq!(TemplateEncoder.name(), "template");
    }
}
