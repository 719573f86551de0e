use log::{info, warn};

use crate::{
    core::store::{DEFAULT_CAPACITY, RecordPatch, RecordStore, StoreError},
    customer::{CustomerDraft, CustomerRecord, NamePatch},
    types::{Category, Code},
};

/// Per-category store capacities.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Maximum number of regular customer records.
    pub regular_capacity: usize,
    /// Maximum number of renter records.
    pub renter_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            regular_capacity: DEFAULT_CAPACITY,
            renter_capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Owns one store per category and hands out codes from disjoint ranges.
///
/// Counters only ever move forward, so a deleted customer's code is never
/// handed out again within the same registry.
#[derive(Debug)]
pub struct CustomerRegistry {
    regular: RecordStore<CustomerRecord>,
    renters: RecordStore<CustomerRecord>,
    next_regular: Code,
    next_renter: Code,
}

impl Default for CustomerRegistry {
    fn default() -> Self {
        Self::with_config(RegistryConfig::default())
    }
}

impl CustomerRegistry {
    /// Empty registry with default capacities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty registry with the given capacities.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            regular: RecordStore::with_capacity(config.regular_capacity),
            renters: RecordStore::with_capacity(config.renter_capacity),
            next_regular: 0,
            next_renter: 0,
        }
    }

    /// Bumps the category counter and returns `counter + base`.
    ///
    /// Once the category's last code has been handed out the counter stays
    /// put and every further call fails with
    /// [`StoreError::CodeRangeExhausted`].
    pub fn assign_code(&mut self, category: Category) -> Result<Code, StoreError> {
        let counter = match category {
            Category::Regular => &mut self.next_regular,
            Category::Renter => &mut self.next_renter,
        };
        let code = category.code_base() + *counter + 1;
        if code > category.code_max() {
            return Err(StoreError::CodeRangeExhausted(category));
        }
        *counter += 1;
        Ok(code)
    }

    /// Category whose store owns `code`.
    pub fn route_by_code(code: Code) -> Category {
        Category::route_by_code(code)
    }

    /// Creates a record in the draft's category and returns its new code.
    ///
    /// A full store is rejected before a code is assigned, so failed adds do
    /// not leave holes in the code sequence. A category whose code range is
    /// used up rejects every further add.
    pub fn add_customer(&mut self, draft: CustomerDraft) -> Result<Code, StoreError> {
        let category = draft.kind.category();
        let store = self.store(category);
        if store.is_full() {
            warn!(
                "event=customer_add status=rejected category={category:?} capacity={}",
                store.capacity()
            );
            return Err(StoreError::CapacityExceeded {
                capacity: store.capacity(),
            });
        }

        let code = self.assign_code(category).inspect_err(|_| {
            warn!(
                "event=customer_add status=rejected category={category:?} reason=codes_exhausted"
            )
        })?;
        self.store_mut(category).add(draft.into_record(code))?;
        info!("event=customer_add status=ok category={category:?} code={code}");
        Ok(code)
    }

    /// Routed lookup.
    pub fn find(&self, code: Code) -> Option<&CustomerRecord> {
        self.store(Self::route_by_code(code)).get(code)
    }

    /// Renames the record with `code`; code and payload are untouched.
    pub fn update(&mut self, code: Code, patch: &NamePatch) -> Result<(), StoreError> {
        self.apply(code, patch)
    }

    /// Routes any record patch to the owning store. Used by sales to move
    /// balances without widening the public name-only update.
    pub(crate) fn apply<P: RecordPatch<CustomerRecord>>(
        &mut self,
        code: Code,
        patch: &P,
    ) -> Result<(), StoreError> {
        self.store_mut(Self::route_by_code(code))
            .update(code, patch)
            .inspect_err(|_| warn!("event=customer_update status=not_found code={code}"))
    }

    /// Removes the record with `code` from its store and returns it.
    pub fn delete(&mut self, code: Code) -> Result<CustomerRecord, StoreError> {
        let removed = self
            .store_mut(Self::route_by_code(code))
            .delete(code)
            .inspect_err(|_| warn!("event=customer_delete status=not_found code={code}"))?;
        info!("event=customer_delete status=ok code={code}");
        Ok(removed)
    }

    /// Regular-customer store, in insertion order.
    pub fn regular(&self) -> &RecordStore<CustomerRecord> {
        &self.regular
    }

    /// Renter store, in insertion order.
    pub fn renters(&self) -> &RecordStore<CustomerRecord> {
        &self.renters
    }

    /// Store owning `category`.
    pub fn store(&self, category: Category) -> &RecordStore<CustomerRecord> {
        match category {
            Category::Regular => &self.regular,
            Category::Renter => &self.renters,
        }
    }

    /// Record count across both categories.
    pub fn total_len(&self) -> usize {
        self.regular.len() + self.renters.len()
    }

    /// True when neither store holds a record.
    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }

    fn store_mut(&mut self, category: Category) -> &mut RecordStore<CustomerRecord> {
        match category {
            Category::Regular => &mut self.regular,
            Category::Renter => &mut self.renters,
        }
    }
}
