//! Bounded in-memory customer records for a restaurant.
//!
//! # Examples
//!
//! Direct store usage with caller-supplied codes:
//! ```
//! use custrec::{
//!     core::store::{RecordStore, StoreError},
//!     customer::CustomerDraft,
//! };
//!
//! let mut store = RecordStore::with_capacity(2);
//! store.add(CustomerDraft::regular("Ana", "Cruz", 0).into_record(1001)).expect("add");
//! store.add(CustomerDraft::regular("Bo", "Diaz", 0).into_record(1002)).expect("add");
//! assert_eq!(
//!     store.add(CustomerDraft::regular("Cy", "Reyes", 0).into_record(1003)),
//!     Err(StoreError::CapacityExceeded { capacity: 2 })
//! );
//! ```
//!
//! Registry usage with generated, category-routed codes:
//! ```
//! use custrec::{
//!     core::registry::CustomerRegistry,
//!     customer::{CustomerDraft, NamePatch},
//!     types::php,
//! };
//!
//! let mut registry = CustomerRegistry::new();
//! let regular = registry.add_customer(CustomerDraft::regular("Ana", "Cruz", 10)).expect("add");
//! let renter = registry
//!     .add_customer(CustomerDraft::renter("Bo", "Diaz", php(3000)))
//!     .expect("add");
//! assert_eq!((regular, renter), (1001, 2001));
//!
//! registry.update(renter, &NamePatch::from_inputs("Boy", "---")).expect("update");
//! assert_eq!(registry.find(renter).map(|r| r.full_name()), Some("Boy Diaz".to_string()));
//! ```
#![deny(missing_docs)]

/// Console prompts and menu.
pub mod cli;
/// Application configuration.
pub mod config;
/// Record store and customer registry.
pub mod core;
/// Customer records, drafts, and name patches.
pub mod customer;
/// Stderr logging bootstrap.
pub mod logging;
/// Fixed-width text reports.
pub mod report;
/// Sales ledger and purchase rules.
pub mod restaurant;
/// Shared primitive types and code ranges.
pub mod types;
