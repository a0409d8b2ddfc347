//! # Payment Link Trait
//!
//! Strategy trait for provider-specific redirect links.
//!
//! ## Design Pattern
//!
//! Each payment provider wants its own URL layout and its own integrity hash
//! over the order fields. A provider is a `PaymentLink` implementation; the
//! hash algorithm is a separate `HashProvider` injected into it, so either
//! side can change without touching the other.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     PaymentLink (trait)                     │
//! │  ├── build_link()                                           │
//! │  ├── try_build_link()                                       │
//! │  └── provider_name()                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!          ┌─────────────────┼─────────────────┐
//!          │                 │                 │
//!  ┌───────┴───────┐ ┌───────┴───────┐ ┌───────┴───────┐
//!  │ ProviderALink │ │ ProviderBLink │ │ ProviderCLink │
//!  │  (md5 hash)   │ │  (md5 hash)   │ │  (sha1 hash)  │
//!  └───────────────┘ └───────────────┘ └───────────────┘
//! ```

use crate::error::{LinkError, LinkResult};
use crate::order::Order;
use std::sync::Arc;

/// Core trait for payment link generation.
pub trait PaymentLink: Send + Sync {
    /// Build the redirect URL for an order.
    fn build_link(&self, order: &Order) -> LinkResult<String>;

    /// Build the redirect URL for an order that may be missing.
    ///
    /// Fails with `InvalidArgument` naming `order` when `order` is `None`.
    fn try_build_link(&self, order: Option<&Order>) -> LinkResult<String> {
        let order = order.ok_or_else(|| LinkError::invalid_argument("order"))?;
        self.build_link(order)
    }

    /// Get the provider name (for logging and routing).
    fn provider_name(&self) -> &str;
}

/// Type alias for a shared payment link builder (dynamic dispatch)
pub type BoxedPaymentLink = Arc<dyn PaymentLink>;

/// Name-keyed collection of link builders.
///
/// Keeps registration order so `build_all` output is stable.
#[derive(Clone, Default)]
pub struct LinkRegistry {
    links: Vec<BoxedPaymentLink>,
}

impl LinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a link builder, replacing any builder with the same name
    pub fn register(&mut self, link: BoxedPaymentLink) {
        match self
            .links
            .iter_mut()
            .find(|l| l.provider_name() == link.provider_name())
        {
            Some(slot) => *slot = link,
            None => self.links.push(link),
        }
    }

    /// Register with builder pattern
    pub fn with_link(mut self, link: BoxedPaymentLink) -> Self {
        self.register(link);
        self
    }

    /// Get a builder by provider name
    pub fn get(&self, provider: &str) -> Option<&BoxedPaymentLink> {
        self.links.iter().find(|l| l.provider_name() == provider)
    }

    /// List all registered providers, in registration order
    pub fn providers(&self) -> Vec<&str> {
        self.links.iter().map(|l| l.provider_name()).collect()
    }

    /// Check if a provider is registered
    pub fn has_provider(&self, provider: &str) -> bool {
        self.get(provider).is_some()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Build the link for one named provider
    pub fn build_link(&self, provider: &str, order: &Order) -> LinkResult<String> {
        self.get(provider)
            .ok_or_else(|| LinkError::UnknownProvider {
                provider: provider.to_string(),
            })?
            .build_link(order)
    }

    /// Build links for every registered provider as `(provider, url)` pairs
    pub fn build_all(&self, order: &Order) -> LinkResult<Vec<(String, String)>> {
        self.links
            .iter()
            .map(|l| Ok((l.provider_name().to_string(), l.build_link(order)?)))
            .collect()
    }
}
