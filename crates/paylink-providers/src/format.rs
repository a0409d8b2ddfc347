//! # Hashed Link Builder
//!
//! Shared "hash some order fields, then fill a URL template" logic.
//! A provider only states its literal format as a `LinkFormat`; `HashedLink`
//! supplies construction, hasher injection, logging and the `PaymentLink` impl.

use crate::config::ProviderConfig;
use paylink_core::{
    HashAlgorithm, LinkError, LinkResult, Order, PaymentLink, SharedHashProvider,
};
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, instrument};

/// A provider's literal link format.
pub trait LinkFormat: Send + Sync + 'static {
    /// Config used when none is given
    fn default_config() -> ProviderConfig;

    /// Hash the provider conventionally expects
    fn default_algorithm() -> HashAlgorithm;

    /// String fed to the hash provider
    fn hash_input(config: &ProviderConfig, order: &Order) -> String;

    /// Final URL, given the computed hash
    fn render(config: &ProviderConfig, order: &Order, hash: &str) -> String;
}

/// Link builder for one provider format with an injected hash provider
pub struct HashedLink<F> {
    config: ProviderConfig,
    hasher: SharedHashProvider,
    _format: PhantomData<fn() -> F>,
}

impl<F: LinkFormat> HashedLink<F> {
    /// Default config and the provider's conventional hash
    pub fn new() -> Self {
        Self::with_hasher(F::default_algorithm().provider())
    }

    /// Default config with an injected hash provider
    pub fn with_hasher(hasher: SharedHashProvider) -> Self {
        Self::with_config(F::default_config(), hasher)
    }

    /// Explicit config and hash provider.
    ///
    /// Unchecked: the config is used as given. Use `from_parts` to validate it.
    pub fn with_config(config: ProviderConfig, hasher: SharedHashProvider) -> Self {
        Self {
            config,
            hasher,
            _format: PhantomData,
        }
    }

    /// Construct from parts that may be missing.
    ///
    /// Fails with `InvalidArgument` when `hasher` is `None` or the config is unusable.
    pub fn from_parts(
        config: ProviderConfig,
        hasher: Option<SharedHashProvider>,
    ) -> LinkResult<Self> {
        let hasher = hasher.ok_or_else(|| LinkError::invalid_argument("hash_provider"))?;
        config.validate()?;
        Ok(Self::with_config(config, hasher))
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Algorithm of the injected hash provider
    pub fn algorithm(&self) -> &'static str {
        self.hasher.algorithm()
    }
}

impl<F: LinkFormat> Default for HashedLink<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Clone for HashedLink<F> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            hasher: self.hasher.clone(),
            _format: PhantomData,
        }
    }
}

impl<F> fmt::Debug for HashedLink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedLink")
            .field("provider", &self.config.name)
            .field("base_url", &self.config.base_url)
            .field("algorithm", &self.hasher.algorithm())
            .finish()
    }
}

impl<F: LinkFormat> PaymentLink for HashedLink<F> {
    // The hash input is never logged: provider C mixes its secret into it.
    #[instrument(skip(self, order), fields(provider = %self.config.name, order_id = order.id()))]
    fn build_link(&self, order: &Order) -> LinkResult<String> {
        let hash = self.hasher.compute_digest(&F::hash_input(&self.config, order));
        let url = F::render(&self.config, order, &hash);

        debug!(algorithm = self.hasher.algorithm(), "Built payment link");

        Ok(url)
    }

    fn provider_name(&self) -> &str {
        &self.config.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paylink_core::HashProvider;
    use std::sync::Arc;

    struct EchoFormat;

    impl LinkFormat for EchoFormat {
        fn default_config() -> ProviderConfig {
            ProviderConfig::new("echo", "echo.test/?", "")
        }

        fn default_algorithm() -> HashAlgorithm {
            HashAlgorithm::Sha256
        }

        fn hash_input(_config: &ProviderConfig, order: &Order) -> String {
            order.id().to_string()
        }

        fn render(config: &ProviderConfig, order: &Order, hash: &str) -> String {
            format!("{}id={}&h={}", config.base_url, order.id(), hash)
        }
    }

    struct Reverse;

    impl HashProvider for Reverse {
        fn compute_digest(&self, input: &str) -> String {
            input.chars().rev().collect()
        }

        fn algorithm(&self) -> &'static str {
            "reverse"
        }
    }

    #[test]
    fn test_new_uses_default_algorithm() {
        let link = HashedLink::<EchoFormat>::new();

        assert_eq!(link.algorithm(), "sha256");
        assert_eq!(link.provider_name(), "echo");
    }

    #[test]
    fn test_injected_hasher() {
        let link = HashedLink::<EchoFormat>::with_hasher(Arc::new(Reverse));

        assert_eq!(link.build_link(&Order::new(123, 0)).unwrap(), "echo.test/?id=123&h=321");
    }

    #[test]
    fn test_from_parts_missing_hasher() {
        let err = HashedLink::<EchoFormat>::from_parts(EchoFormat::default_config(), None)
            .unwrap_err();

        assert_eq!(err, LinkError::invalid_argument("hash_provider"));
    }

    #[test]
    fn test_from_parts_bad_config() {
        let config = EchoFormat::default_config().with_base_url("");
        let err = HashedLink::<EchoFormat>::from_parts(config, Some(Arc::new(Reverse)))
            .unwrap_err();

        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_with_config_skips_validation() {
        let config = EchoFormat::default_config().with_base_url("");
        let link = HashedLink::<EchoFormat>::with_config(config.clone(), Arc::new(Reverse));

        assert_eq!(link.build_link(&Order::new(12, 0)).unwrap(), "id=12&h=21");
        assert!(HashedLink::<EchoFormat>::from_parts(config, Some(Arc::new(Reverse))).is_err());
    }

    #[test]
    fn test_debug_shows_algorithm() {
        let debug = format!("{:?}", HashedLink::<EchoFormat>::new());

        assert!(debug.contains("sha256"));
        assert!(debug.contains("echo"));
    }
}
