//! # Provider A
//!
//! Hash over the order id alone; amount travels in the clear with the
//! currency glued on.
//!
//! ```text
//! pay.providerA.example/order?amount=<amount>RUB&hash=<md5(id)>
//! ```

use crate::config::{ProviderConfig, CURRENCY};
use crate::format::{HashedLink, LinkFormat};
use paylink_core::{HashAlgorithm, Order};

/// Link format for provider A
#[derive(Debug, Clone, Copy)]
pub struct ProviderAFormat;

impl LinkFormat for ProviderAFormat {
    fn default_config() -> ProviderConfig {
        ProviderConfig::provider_a()
    }

    fn default_algorithm() -> HashAlgorithm {
        HashAlgorithm::Md5
    }

    fn hash_input(_config: &ProviderConfig, order: &Order) -> String {
        order.id().to_string()
    }

    fn render(config: &ProviderConfig, order: &Order, hash: &str) -> String {
        format!(
            "{}amount={}{}&hash={}",
            config.base_url,
            order.amount(),
            CURRENCY,
            hash
        )
    }
}

/// Provider A link builder (MD5 by default)
pub type ProviderALink = HashedLink<ProviderAFormat>;
