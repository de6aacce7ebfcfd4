use serde::{Deserialize, Deserializer, Serialize};

/// A stored device record.
///
/// Only `serial_number` and `port_number` are covered by signatures;
/// the store-assigned `id` is carried on the wire but never signed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub serial_number: String,
    #[serde(deserialize_with = "port_number")]
    pub port_number: String,
}

impl Device {
    pub fn new(serial_number: impl Into<String>, port_number: impl Into<String>) -> Self {
        Self {
            id: None,
            serial_number: serial_number.into(),
            port_number: port_number.into(),
        }
    }
}

/// Accepts `"8080"` or `8080` on the wire; both normalize to text.
fn port_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PortNumber {
        Text(String),
        Numeric(u64),
    }

    Ok(match PortNumber::deserialize(deserializer)? {
        PortNumber::Text(text) => text,
        PortNumber::Numeric(numeric) => numeric.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_string_port() {
        let device: Device =
            serde_json::from_str(r#"{"serialNumber":"SN123","portNumber":"8080"}"#).unwrap();
        assert_eq!(device.serial_number, "SN123");
        assert_eq!(device.port_number, "8080");
        assert_eq!(device.id, None);
    }

    #[test]
    fn deserializes_numeric_port() {
        let device: Device =
            serde_json::from_str(r#"{"serialNumber":"SN123","portNumber":8080}"#).unwrap();
        assert_eq!(device.port_number, "8080");
    }

    #[test]
    fn serializes_camel_case_with_id() {
        let device = Device {
            id: Some(7),
            ..Device::new("SN123", "8080")
        };
        let json = serde_json::to_string(&device).unwrap();
        assert_eq!(
            json,
            r#"{"id":7,"serialNumber":"SN123","portNumber":"8080"}"#
        );
    }

    #[test]
    fn omits_absent_id() {
        let json = serde_json::to_string(&Device::new("SN123", "8080")).unwrap();
        assert!(!json.contains("id"));
    }
}
