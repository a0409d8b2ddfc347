//! # Provider Configuration
//!
//! Fixed per-provider constants: registry name, base URL and shared secret.
//! Values are plain data; embedders construct them from whatever source they own.

use paylink_core::{LinkError, LinkResult};
use serde::{Deserialize, Serialize};

pub const PROVIDER_A_BASE_URL: &str = "pay.providerA.example/order?";
pub const PROVIDER_B_BASE_URL: &str = "order.providerB.example/pay?";
pub const PROVIDER_C_BASE_URL: &str = "providerC.example/pay?";

/// Secret provider C mixes into its hash input
pub const PROVIDER_C_SECRET: &str = "secret_key";

/// Currency every provider is billed in
pub const CURRENCY: &str = "RUB";

/// Per-provider link configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Registry name (e.g., "provider_a")
    pub name: String,

    /// URL prefix, including the trailing `?`
    pub base_url: String,

    /// Shared secret appended to the hash input (empty when unused)
    #[serde(default)]
    pub secret: String,
}

impl ProviderConfig {
    /// Create config with explicit values
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            secret: secret.into(),
        }
    }

    /// Defaults for provider A
    pub fn provider_a() -> Self {
        Self::new("provider_a", PROVIDER_A_BASE_URL, "")
    }

    /// Defaults for provider B
    pub fn provider_b() -> Self {
        Self::new("provider_b", PROVIDER_B_BASE_URL, "")
    }

    /// Defaults for provider C
    pub fn provider_c() -> Self {
        Self::new("provider_c", PROVIDER_C_BASE_URL, PROVIDER_C_SECRET)
    }

    /// Builder: set a custom base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder: set a custom registry name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder: set the shared secret
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = secret.into();
        self
    }

    /// Reject configs a link cannot be built from
    pub fn validate(&self) -> LinkResult<()> {
        if self.name.trim().is_empty() {
            return Err(LinkError::invalid_argument("provider name"));
        }
        if self.base_url.trim().is_empty() {
            return Err(LinkError::invalid_argument("base_url"));
        }
        Ok(())
    }
}
