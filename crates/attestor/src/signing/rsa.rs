use rsa::RsaPrivateKey;
use rsa::pkcs1v15::{SigningKey, VerifyingKey};
use rsa::signature::{SignatureEncoding, Signer};
use sha2::Sha256;

use super::signer::{RecordSigner, SignError};

/// RSA PKCS#1 v1.5 signer with SHA-256 digest.
///
/// Wraps a parsed private key; the key handle stays inside this type
/// and is never exposed or logged.
pub struct RsaRecordSigner {
    signing_key: SigningKey<Sha256>,
    private_key: RsaPrivateKey,
}

impl RsaRecordSigner {
    pub fn new(private_key: RsaPrivateKey) -> Self {
        let signing_key = SigningKey::<Sha256>::new(private_key.clone());
        Self {
            signing_key,
            private_key,
        }
    }

    /// Verifying half of the key, for callers that check signatures.
    pub fn verifying_key(&self) -> VerifyingKey<Sha256> {
        VerifyingKey::<Sha256>::new(self.private_key.to_public_key())
    }
}

impl RecordSigner for RsaRecordSigner {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, SignError> {
        let signature = self
            .signing_key
            .try_sign(data)
            .map_err(|e| SignError::Signing(e.to_string()))?;
        Ok(signature.to_vec())
    }

    fn algorithm(&self) -> &str {
        "rsa-pkcs1v15-sha256"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_chacha::rand_core::SeedableRng;
    use rsa::signature::Verifier;
    use sha2::Digest;

    const RSA_KEY_BITS: usize = 2048;

    fn test_signer() -> RsaRecordSigner {
        let hash = Sha256::digest(b"rsa-signer-test");
        let mut rng = ChaCha20Rng::from_seed(hash.into());
        let private_key = RsaPrivateKey::new(&mut rng, RSA_KEY_BITS).unwrap();
        RsaRecordSigner::new(private_key)
    }

    #[test]
    fn deterministic_signing() {
        let signer = test_signer();
        let sig1 = signer.sign(b"hello").unwrap();
        let sig2 = signer.sign(b"hello").unwrap();
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn signature_is_256_bytes() {
        let signer = test_signer();
        let sig = signer.sign(b"data").unwrap();
        assert_eq!(sig.len(), RSA_KEY_BITS / 8);
    }

    #[test]
    fn algorithm_is_rsa_pkcs1v15_sha256() {
        assert_eq!(test_signer().algorithm(), "rsa-pkcs1v15-sha256");
    }

    #[test]
    fn signature_verifies() {
        let signer = test_signer();
        let data = b"verify me";
        let sig_bytes = signer.sign(data).unwrap();

        let signature = rsa::pkcs1v15::Signature::try_from(sig_bytes.as_slice()).unwrap();
        signer.verifying_key().verify(data, &signature).unwrap();
    }
}
