use crate::encoding::EncodeError;

use super::key::KeyParseError;

/// A failure while signing a record batch.
#[derive(Debug, thiserror::Error)]
pub enum SignError {
    #[error("failed to resolve signing key: {0}")]
    KeyParse(#[from] KeyParseError),
    #[error(transparent)]
    Encoding(#[from] EncodeError),
    #[error("signing operation rejected: {0}")]
    Signing(String),
}

/// Trait for signing canonical record bytes.
///
/// Implementations are sync — signing is CPU-bound.
/// For async backends (e.g. KMS), use `spawn_blocking`.
pub trait RecordSigner: Send + Sync {
    /// Sign canonical bytes. Returns raw signature bytes.
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, SignError>;

    /// Algorithm identifier string (e.g. "rsa-pkcs1v15-sha256").
    fn algorithm(&self) -> &str;
}
