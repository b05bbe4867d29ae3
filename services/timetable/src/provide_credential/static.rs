use crate::Credential;
use async_trait::async_trait;
use ptvsign_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides a fixed dev id and api key.
///
/// This provider is used when you have the credential pair directly and want
/// to use it without any dynamic loading.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    dev_id: String,
    api_key: String,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with a dev id and api key.
    pub fn new(dev_id: &str, api_key: &str) -> Self {
        Self {
            dev_id: dev_id.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(Credential {
            dev_id: self.dev_id.clone(),
            api_key: self.api_key.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_credential_provider() -> anyhow::Result<()> {
        let ctx = Context::new();

        let provider = StaticCredentialProvider::new("3000000", "test_api_key");
        let cred = provider.provide_credential(&ctx).await?;
        assert!(cred.is_some());
        let cred = cred.unwrap();
        assert_eq!(cred.dev_id, "3000000");
        assert_eq!(cred.api_key, "test_api_key");

        Ok(())
    }
}
