//! # Order Types
//!
//! The purchase record a payment link is generated for.

use serde::{Deserialize, Serialize};

/// An order to be paid.
///
/// Immutable once built: fields are only reachable through accessors, and
/// link builders only ever see `&Order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    id: u64,
    amount: u64,
}

impl Order {
    /// Create an order.
    ///
    /// `amount` is in whatever unit the target provider expects (minor or major).
    pub fn new(id: u64, amount: u64) -> Self {
        Self { id, amount }
    }

    /// Order identifier
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Order amount
    pub fn amount(&self) -> u64 {
        self.amount
    }
}
