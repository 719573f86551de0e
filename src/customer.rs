//! Customer record, draft, and name patch types.

use serde::{Deserialize, Serialize};

use crate::{
    core::store::{Keyed, RecordPatch},
    types::{Category, Centavos, Code},
};

/// Input token meaning "leave this field unchanged" during an update.
pub const KEEP_SENTINEL: &str = "---";

/// Category-specific payload of a customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerKind {
    /// Regular customer.
    Regular {
        /// Accumulated loyalty points.
        loyalty_points: u32,
    },
    /// Renter paying from a deposit.
    Renter {
        /// Remaining deposit; may be negative down to the sales floor.
        deposit: Centavos,
    },
}

impl CustomerKind {
    /// Category tag for this payload.
    pub fn category(&self) -> Category {
        match self {
            Self::Regular { .. } => Category::Regular,
            Self::Renter { .. } => Category::Renter,
        }
    }
}

/// Fully materialized customer record owned by a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Immutable customer code.
    pub code: Code,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Category payload.
    pub kind: CustomerKind,
}

impl CustomerRecord {
    /// Category of the record, derived from its payload.
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// `"First Last"`, as shown in reports.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Loyalty points for regular customers.
    pub fn loyalty_points(&self) -> Option<u32> {
        match self.kind {
            CustomerKind::Regular { loyalty_points } => Some(loyalty_points),
            CustomerKind::Renter { .. } => None,
        }
    }

    /// Deposit for renters.
    pub fn deposit(&self) -> Option<Centavos> {
        match self.kind {
            CustomerKind::Renter { deposit } => Some(deposit),
            CustomerKind::Regular { .. } => None,
        }
    }
}

impl Keyed for CustomerRecord {
    fn code(&self) -> Code {
        self.code
    }
}

/// Insert payload; the registry assigns the code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDraft {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Category payload; also selects the target store.
    pub kind: CustomerKind,
}

impl CustomerDraft {
    /// Draft for a regular customer.
    pub fn regular(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        loyalty_points: u32,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            kind: CustomerKind::Regular { loyalty_points },
        }
    }

    /// Draft for a renter.
    pub fn renter(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        deposit: Centavos,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            kind: CustomerKind::Renter { deposit },
        }
    }

    /// Binds the draft to a code.
    pub fn into_record(self, code: Code) -> CustomerRecord {
        CustomerRecord {
            code,
            first_name: self.first_name,
            last_name: self.last_name,
            kind: self.kind,
        }
    }
}

/// Sparse name update where each `Some` field overwrites the record value.
///
/// Only names are mutable; code and category never change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NamePatch {
    /// Optional replacement for the first name.
    pub first_name: Option<String>,
    /// Optional replacement for the last name.
    pub last_name: Option<String>,
}

impl NamePatch {
    /// Builds a patch from raw console inputs, treating [`KEEP_SENTINEL`] as
    /// "no change".
    pub fn from_inputs(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: keep_or(first_name),
            last_name: keep_or(last_name),
        }
    }

    /// Returns true when no fields are set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl RecordPatch<CustomerRecord> for NamePatch {
    fn apply_to(&self, rec: &mut CustomerRecord) {
        if let Some(v) = &self.first_name {
            rec.first_name = v.clone();
        }
        if let Some(v) = &self.last_name {
            rec.last_name = v.clone();
        }
    }
}

fn keep_or(input: &str) -> Option<String> {
    if input == KEEP_SENTINEL {
        None
    } else {
        Some(input.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keep_sentinel_yields_empty_patch() {
        let patch = NamePatch::from_inputs(KEEP_SENTINEL, KEEP_SENTINEL);
        assert!(patch.is_empty());
    }

    #[test]
    fn sentinel_is_matched_exactly() {
        let patch = NamePatch::from_inputs("--", "----");
        assert_eq!(patch.first_name.as_deref(), Some("--"));
        assert_eq!(patch.last_name.as_deref(), Some("----"));
    }

    #[test]
    fn patch_touches_only_names() {
        let mut rec = CustomerDraft::renter("Ana", "Cruz", 300_000).into_record(2001);
        NamePatch::from_inputs("Anna", KEEP_SENTINEL).apply_to(&mut rec);
        assert_eq!(rec.code, 2001);
        assert_eq!(rec.first_name, "Anna");
        assert_eq!(rec.last_name, "Cruz");
        assert_eq!(rec.deposit(), Some(300_000));
    }
}
