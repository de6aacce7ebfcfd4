use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose;
use tracing::warn;

use crate::device::Device;
use crate::encoding::RecordEncoder;

use super::key::{KeyParseError, KeyProvider};
use super::signer::{RecordSigner, SignError};

/// Outcome of a batch signing attempt.
///
/// The batch contract is all-or-nothing: a failure on any record
/// discards signatures already computed in the same call.
#[derive(Debug)]
pub enum BatchOutcome {
    /// No records were supplied. Distinct from a zero-length success.
    Empty,
    /// One base64 signature per input record, in input order.
    Success(Vec<String>),
    /// The batch failed; no partial signatures are returned.
    Failure(SignError),
}

/// Signs ordered batches of device records.
///
/// Resolves the process key once per batch through the [`KeyProvider`]
/// and runs every record through the configured encoder.
pub struct SigningEngine {
    keys: KeyProvider,
    encoder: Arc<dyn RecordEncoder>,
}

impl SigningEngine {
    pub fn new(keys: KeyProvider, encoder: Arc<dyn RecordEncoder>) -> Self {
        Self { keys, encoder }
    }

    /// Sign every record with the process signing key.
    pub fn sign_all(&self, records: &[Device]) -> BatchOutcome {
        if records.is_empty() {
            return BatchOutcome::Empty;
        }
        let signer = match self.keys.signer() {
            Ok(signer) => signer,
            Err(error) => return BatchOutcome::Failure(error.into()),
        };
        self.sign_all_with(records, signer.as_ref())
    }

    /// Sign every record with an explicit signer.
    pub fn sign_all_with(&self, records: &[Device], signer: &dyn RecordSigner) -> BatchOutcome {
        if records.is_empty() {
            return BatchOutcome::Empty;
        }

        let mut signatures = Vec::with_capacity(records.len());
        for device in records {
            match self.sign_one(device, signer) {
                Ok(signature) => signatures.push(signature),
                Err(error) => {
                    warn!(
                        signed = signatures.len(),
                        total = records.len(),
                        algorithm = signer.algorithm(),
                        %error,
                        "batch signing aborted, discarding partial results",
                    );
                    return BatchOutcome::Failure(error);
                }
            }
        }
        BatchOutcome::Success(signatures)
    }

    /// Per-record variant of [`sign_all`]: one record's failure does not
    /// discard the others. Key resolution still fails the whole call.
    ///
    /// [`sign_all`]: Self::sign_all
    pub fn sign_each(
        &self,
        records: &[Device],
    ) -> Result<Vec<Result<String, SignError>>, KeyParseError> {
        let signer = self.keys.signer()?;
        Ok(records
            .iter()
            .map(|device| self.sign_one(device, signer.as_ref()))
            .collect())
    }

    fn sign_one(&self, device: &Device, signer: &dyn RecordSigner) -> Result<String, SignError> {
        let encoded = self.encoder.encode(device)?;
        let signature = signer.sign(&encoded)?;
        Ok(general_purpose::STANDARD.encode(signature))
    }
}
