//! # Provider C
//!
//! Amount, id and a shared secret are hashed together; amount and currency
//! are also sent as separate query parameters.
//!
//! ```text
//! providerC.example/pay?amount=<amount>&currency=RUB&hash=<sha1(amount ++ id ++ secret)>
//! ```

use crate::config::{ProviderConfig, CURRENCY};
use crate::format::{HashedLink, LinkFormat};
use paylink_core::{HashAlgorithm, Order};

/// Link format for provider C
#[derive(Debug, Clone, Copy)]
pub struct ProviderCFormat;

impl LinkFormat for ProviderCFormat {
    fn default_config() -> ProviderConfig {
        ProviderConfig::provider_c()
    }

    fn default_algorithm() -> HashAlgorithm {
        HashAlgorithm::Sha1
    }

    fn hash_input(config: &ProviderConfig, order: &Order) -> String {
        format!("{}{}{}", order.amount(), order.id(), config.secret)
    }

    fn render(config: &ProviderConfig, order: &Order, hash: &str) -> String {
        format!(
            "{}amount={}&currency={}&hash={}",
            config.base_url,
            order.amount(),
            CURRENCY,
            hash
        )
    }
}

/// Provider C link builder (SHA-1 by default)
pub type ProviderCLink = HashedLink<ProviderCFormat>;
