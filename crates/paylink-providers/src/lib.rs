//! # paylink-providers
//!
//! Provider link formats for paylink-rs.
//!
//! | Provider | Hash input              | Default hash |
//! |----------|-------------------------|--------------|
//! | A        | `id`                    | MD5          |
//! | B        | `id ++ amount`          | MD5          |
//! | C        | `amount ++ id ++ secret`| SHA-1        |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paylink_core::{Order, PaymentLink, Sha256HashProvider};
//! use paylink_providers::{default_registry, ProviderALink};
//! use std::sync::Arc;
//!
//! let order = Order::new(123, 12000);
//!
//! // One provider, conventional hash
//! let url = ProviderALink::new().build_link(&order)?;
//!
//! // One provider, injected hash
//! let url = ProviderALink::with_hasher(Arc::new(Sha256HashProvider)).build_link(&order)?;
//!
//! // Every provider
//! for (provider, url) in default_registry().build_all(&order)? {
//!     println!("{provider}: {url}");
//! }
//! ```

pub mod config;
pub mod format;
pub mod provider_a;
pub mod provider_b;
pub mod provider_c;

use paylink_core::{HashAlgorithm, LinkRegistry};
use std::sync::Arc;

// Re-exports
pub use config::{ProviderConfig, CURRENCY};
pub use format::{HashedLink, LinkFormat};
pub use provider_a::{ProviderAFormat, ProviderALink};
pub use provider_b::{ProviderBFormat, ProviderBLink};
pub use provider_c::{ProviderCFormat, ProviderCLink};

/// Registry with providers A, B and C using their conventional hashes
pub fn default_registry() -> LinkRegistry {
    LinkRegistry::new()
        .with_link(Arc::new(ProviderALink::new()))
        .with_link(Arc::new(ProviderBLink::new()))
        .with_link(Arc::new(ProviderCLink::new()))
}

/// Registry with providers A, B and C all sharing one hash algorithm
pub fn registry_with_algorithm(algorithm: HashAlgorithm) -> LinkRegistry {
    let hasher = algorithm.provider();
    LinkRegistry::new()
        .with_link(Arc::new(ProviderALink::with_hasher(hasher.clone())))
        .with_link(Arc::new(ProviderBLink::with_hasher(hasher.clone())))
        .with_link(Arc::new(ProviderCLink::with_hasher(hasher)))
}
