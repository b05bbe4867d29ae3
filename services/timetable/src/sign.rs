use crate::constants::{DEFAULT_ENDPOINT, VERSION_PREFIX};
use crate::Credential;
use ptvsign_core::hash::hex_hmac_sha1;
use ptvsign_core::{Error, Result};

/// RequestSigner for the PTV timetable signature scheme.
///
/// The service authenticates GET requests with an HMAC-SHA1 over the exact
/// path-and-query byte sequence that is sent, upper-case hex encoded, and
/// appended as a trailing `signature` parameter. The signed bytes must match
/// the transmitted bytes exactly, so this type is the only place where the
/// query string is assembled.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    endpoint: String,
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestSigner {
    /// Create a signer pointing at the production host.
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Point the signer at a different host, e.g. a test double.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    /// Build the byte sequence the signature is computed over:
    /// `/v3/<path>?<query>` with `devid` appended as the last parameter.
    ///
    /// Query pairs keep their given order; the encoding here is the encoding
    /// on the wire. The caller's pairs are copied, never mutated.
    pub fn string_to_sign(
        &self,
        cred: &Credential,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<String> {
        validate_path(path)?;

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in params {
            if *key == "devid" || *key == "signature" {
                return Err(Error::request_invalid(format!(
                    "query parameter {key} is injected by the signer and must not be supplied"
                )));
            }
            serializer.append_pair(key, value);
        }
        serializer.append_pair("devid", &cred.dev_id);
        let query = serializer.finish();

        Ok(format!("{VERSION_PREFIX}{path}?{query}"))
    }

    /// Compute the signature for a call.
    pub fn signature(&self, cred: &Credential, string_to_sign: &str) -> String {
        hex_hmac_sha1(cred.api_key.as_bytes(), string_to_sign.as_bytes()).to_ascii_uppercase()
    }

    /// Build the fully-qualified, authenticated URL for a call.
    pub fn signed_url(
        &self,
        cred: &Credential,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<String> {
        let call = self.string_to_sign(cred, path, params)?;
        let signature = self.signature(cred, &call);

        Ok(format!("{}{}&signature={}", self.endpoint, call, signature))
    }
}

fn validate_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(Error::request_invalid("path must not be empty"));
    }
    if path.starts_with('/') {
        return Err(Error::request_invalid(
            "path must not start with '/'; the version prefix is added by the signer",
        ));
    }
    if path.contains('?') {
        return Err(Error::request_invalid(
            "path must not carry a query string; pass parameters separately",
        ));
    }

    Ok(())
}
