mod engine;
mod key;
mod rsa;
mod signer;

pub use engine::{BatchOutcome, SigningEngine};
pub use key::{FileKeySource, KeyParseError, KeyProvider, KeyTextSource, StaticKeySource, resolve_private_key};
pub use self::rsa::RsaRecordSigner;
pub use signer::{RecordSigner, SignError};
