use ptvsign_core::utils::Redact;
use ptvsign_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential that holds the developer id and the shared signing key.
///
/// The `dev_id` travels with every request as the `devid` query parameter;
/// the `api_key` is only ever used to compute the HMAC signature and is
/// never transmitted.
#[derive(Default, Clone)]
pub struct Credential {
    /// Developer id issued by the transit authority.
    pub dev_id: String,
    /// Shared secret used to sign each call.
    pub api_key: String,
}

impl Credential {
    /// Create a new credential from a developer id and key pair.
    pub fn new(dev_id: &str, api_key: &str) -> Self {
        Self {
            dev_id: dev_id.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("dev_id", &self.dev_id)
            .field("api_key", &Redact::from(&self.api_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.dev_id.is_empty() && !self.api_key.is_empty()
    }
}
