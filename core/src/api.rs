use crate::{Context, Result};
use std::fmt::Debug;

/// SigningCredential is implemented by credential types that can be used to
/// sign API calls.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is complete enough to sign with.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential loads a credential from somewhere in the environment.
///
/// Returning `Ok(None)` means this provider has nothing to offer; callers
/// decide whether that is fatal. Errors are reserved for sources that exist
/// but cannot be read.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: SigningCredential;

    /// Load the credential from the current environment.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// A chain of credential providers, tried front to back.
///
/// The first provider that returns a credential wins; `Ok(None)` from one
/// provider simply moves on to the next.
#[derive(Debug)]
pub struct ProvideCredentialChain<C: SigningCredential> {
    providers: Vec<Box<dyn ProvideCredential<Credential = C>>>,
}

impl<C: SigningCredential> Default for ProvideCredentialChain<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: SigningCredential> ProvideCredentialChain<C> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Append a provider to the end of the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = C> + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Insert a provider at the front of the chain so it is tried first.
    pub fn push_front(
        mut self,
        provider: impl ProvideCredential<Credential = C> + 'static,
    ) -> Self {
        self.providers.insert(0, Box::new(provider));
        self
    }

    /// Walk the chain and return the first credential found.
    pub async fn provide_credential(&self, ctx: &Context) -> Result<Option<C>> {
        for provider in &self.providers {
            if let Some(cred) = provider.provide_credential(ctx).await? {
                return Ok(Some(cred));
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestCredential(&'static str);

    impl SigningCredential for TestCredential {
        fn is_valid(&self) -> bool {
            !self.0.is_empty()
        }
    }

    #[derive(Debug)]
    struct FixedProvider(Option<TestCredential>);

    #[async_trait::async_trait]
    impl ProvideCredential for FixedProvider {
        type Credential = TestCredential;

        async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_optional_credential_validity() {
        assert!(Some(TestCredential("k")).is_valid());
        assert!(!Some(TestCredential("")).is_valid());
        assert!(!None::<TestCredential>.is_valid());
    }

    #[tokio::test]
    async fn test_chain_returns_first_hit() {
        let ctx = Context::new();
        let chain = ProvideCredentialChain::new()
            .push(FixedProvider(None))
            .push(FixedProvider(Some(TestCredential("second"))))
            .push(FixedProvider(Some(TestCredential("third"))));

        let cred = chain.provide_credential(&ctx).await.unwrap();
        assert_eq!(cred, Some(TestCredential("second")));
    }

    #[tokio::test]
    async fn test_chain_push_front_wins() {
        let ctx = Context::new();
        let chain = ProvideCredentialChain::new()
            .push(FixedProvider(Some(TestCredential("back"))))
            .push_front(FixedProvider(Some(TestCredential("front"))));

        let cred = chain.provide_credential(&ctx).await.unwrap();
        assert_eq!(cred, Some(TestCredential("front")));
    }

    #[tokio::test]
    async fn test_empty_chain_yields_none() {
        let ctx = Context::new();
        let chain = ProvideCredentialChain::<TestCredential>::new();

        assert!(chain.provide_credential(&ctx).await.unwrap().is_none());
    }
}
