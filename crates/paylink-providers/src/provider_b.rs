//! # Provider B
//!
//! Everything goes through the hash: id and amount are concatenated with no
//! separator and nothing else appears in the query.
//!
//! ```text
//! order.providerB.example/pay?hash=<md5(id ++ amount)>
//! ```

use crate::config::ProviderConfig;
use crate::format::{HashedLink, LinkFormat};
use paylink_core::{HashAlgorithm, Order};

/// Link format for provider B
#[derive(Debug, Clone, Copy)]
pub struct ProviderBFormat;

impl LinkFormat for ProviderBFormat {
    fn default_config() -> ProviderConfig {
        ProviderConfig::provider_b()
    }

    fn default_algorithm() -> HashAlgorithm {
        HashAlgorithm::Md5
    }

    fn hash_input(_config: &ProviderConfig, order: &Order) -> String {
        format!("{}{}", order.id(), order.amount())
    }

    fn render(config: &ProviderConfig, _order: &Order, hash: &str) -> String {
        format!("{}hash={}", config.base_url, hash)
    }
}

/// Provider B link builder (MD5 by default)
pub type ProviderBLink = HashedLink<ProviderBFormat>;
