use crate::{Config, Credential};
use async_trait::async_trait;
use ptvsign_core::{Context, Error, ProvideCredential, Result};
use std::sync::Arc;

/// ConfigCredentialProvider loads the credential from static config.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new `ConfigCredentialProvider` instance.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
        match (&self.config.dev_id, &self.config.api_key) {
            (Some(dev_id), Some(api_key)) => Ok(Some(Credential {
                dev_id: dev_id.clone(),
                api_key: api_key.clone(),
            })),
            (None, None) => Ok(None),
            // A half-filled config is a caller mistake, not a missing
            // source; fail loudly instead of falling through the chain.
            (Some(_), None) => Err(Error::config_invalid(
                "config sets dev_id but no api_key",
            )),
            (None, Some(_)) => Err(Error::config_invalid(
                "config sets api_key but no dev_id",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptvsign_core::ErrorKind;

    #[tokio::test]
    async fn test_config_loader_with_credentials() {
        let config = Config {
            dev_id: Some("3000000".to_string()),
            api_key: Some("test_api_key".to_string()),
            ..Default::default()
        };

        let provider = ConfigCredentialProvider::new(config.into());
        let cred = provider
            .provide_credential(&Context::new())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(cred.dev_id, "3000000");
        assert_eq!(cred.api_key, "test_api_key");
    }

    #[tokio::test]
    async fn test_config_loader_without_credentials() {
        let provider = ConfigCredentialProvider::new(Config::default().into());
        let cred = provider.provide_credential(&Context::new()).await.unwrap();

        assert!(cred.is_none());
    }

    #[tokio::test]
    async fn test_config_loader_rejects_half_filled_config() {
        let config = Config {
            dev_id: Some("3000000".to_string()),
            ..Default::default()
        };

        let provider = ConfigCredentialProvider::new(config.into());
        let err = provider
            .provide_credential(&Context::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}
