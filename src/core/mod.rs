//! In-memory record store and the two-category customer registry.

/// Category-routed registry with per-category code assignment.
pub mod registry;
/// Bounded, order-preserving record store.
pub mod store;
