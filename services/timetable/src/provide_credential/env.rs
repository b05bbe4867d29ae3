use crate::{constants::*, Credential};
use async_trait::async_trait;
use ptvsign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads the credential from environment variables.
///
/// This provider looks for the following environment variables:
/// - `PTV_DEV_ID`: the developer id issued by the transit authority
/// - `PTV_API_KEY`: the shared signing key
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        match (envs.get(PTV_DEV_ID), envs.get(PTV_API_KEY)) {
            (Some(dev_id), Some(api_key)) => Ok(Some(Credential {
                dev_id: dev_id.clone(),
                api_key: api_key.clone(),
            })),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptvsign_core::StaticEnv;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_env_credential_provider() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (PTV_DEV_ID.to_string(), "3000000".to_string()),
                (PTV_API_KEY.to_string(), "test_api_key".to_string()),
            ]),
        });

        let provider = EnvCredentialProvider::new();
        let cred = provider.provide_credential(&ctx).await?;
        assert!(cred.is_some());
        let cred = cred.unwrap();
        assert_eq!(cred.dev_id, "3000000");
        assert_eq!(cred.api_key, "test_api_key");

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_missing_credentials() -> anyhow::Result<()> {
        let ctx = Context::new();

        let provider = EnvCredentialProvider::new();
        let cred = provider.provide_credential(&ctx).await?;
        assert!(cred.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_partial_credentials() -> anyhow::Result<()> {
        // Only the dev id, no key
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([(PTV_DEV_ID.to_string(), "3000000".to_string())]),
        });

        let provider = EnvCredentialProvider::new();
        let cred = provider.provide_credential(&ctx).await?;
        assert!(cred.is_none());

        Ok(())
    }
}
