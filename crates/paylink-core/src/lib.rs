//! # paylink-core
//!
//! Core types and traits for the paylink payment link generator.
//!
//! This crate provides:
//! - `PaymentLink` trait for implementing provider link formats
//! - `HashProvider` trait plus MD5, SHA-1 and SHA-256 implementations
//! - `Order` for the purchase being paid
//! - `LinkRegistry` for building links across several providers
//! - `LinkError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use paylink_core::{HashProvider, LinkRegistry, Md5HashProvider, Order};
//!
//! let order = Order::new(123, 12000);
//! let hash = Md5HashProvider.compute_digest(&order.id().to_string());
//!
//! // Registered `PaymentLink` implementations turn the order into redirect URLs
//! let registry = LinkRegistry::new();
//! let links = registry.build_all(&order)?;
//! ```

pub mod error;
pub mod hash;
pub mod link;
pub mod order;

// Re-exports for convenience
pub use error::{LinkError, LinkResult};
pub use hash::{
    HashAlgorithm, HashProvider, Md5HashProvider, Sha1HashProvider, Sha256HashProvider,
    SharedHashProvider,
};
pub use link::{BoxedPaymentLink, LinkRegistry, PaymentLink};
pub use order::Order;
