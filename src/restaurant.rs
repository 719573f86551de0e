//! Restaurant sales ledger, purchase rules, and sales simulation.

use std::fmt;

use log::{info, warn};
use rand::Rng;

use crate::{
    core::{
        registry::{CustomerRegistry, RegistryConfig},
        store::{RecordPatch, StoreError},
    },
    customer::{CustomerKind, CustomerRecord},
    types::{Category, Centavos, Code, format_centavos, php},
};

/// Purchase and simulation rules.
#[derive(Debug, Clone)]
pub struct SalesPolicy {
    /// Smallest deposit accepted when a renter is created.
    pub min_renter_deposit: Centavos,
    /// A renter purchase may not leave the deposit below this value.
    pub renter_deposit_floor: Centavos,
    /// Amount of the simulated regular-customer purchase.
    pub simulated_regular_amount: Centavos,
    /// Amounts of the simulated renter purchases, in order.
    pub simulated_renter_amounts: [Centavos; 2],
}

impl Default for SalesPolicy {
    fn default() -> Self {
        Self {
            min_renter_deposit: php(3000),
            renter_deposit_floor: php(-1000),
            simulated_regular_amount: php(75),
            simulated_renter_amounts: [php(85), php(4500)],
        }
    }
}

/// Errors raised by purchases and simulations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SalesError {
    /// Underlying store failure.
    Store(StoreError),
    /// Renter purchase would cross the deposit floor.
    DepositFloor {
        /// Renter code.
        code: Code,
        /// Deposit before the attempted purchase.
        deposit: Centavos,
        /// Attempted purchase amount.
        amount: Centavos,
    },
    /// Purchase amount is zero, negative, or would overflow the ledger.
    InvalidAmount(Centavos),
    /// Simulation needs at least one regular customer.
    NoRegularCustomers,
    /// Simulation needs at least one renter.
    NoRenters,
}

impl From<StoreError> for SalesError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl fmt::Display for SalesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::DepositFloor { .. } => write!(
                f,
                "the transaction failed because the deposit would be below the minimum allowed"
            ),
            Self::InvalidAmount(amount) => {
                write!(f, "{} is not a valid purchase amount", format_centavos(*amount))
            }
            Self::NoRegularCustomers => {
                write!(f, "sales cannot be simulated without a regular customer record")
            }
            Self::NoRenters => write!(f, "sales cannot be simulated without a renter record"),
        }
    }
}

impl std::error::Error for SalesError {}

/// Result of a successful purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseReceipt {
    /// Amount paid.
    pub amount: Centavos,
    /// Customer state after the purchase.
    pub customer: CustomerRecord,
    /// Restaurant total after the purchase.
    pub total_sales: Centavos,
}

/// One step of a sales simulation, successful or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedPurchase {
    /// Buyer code.
    pub code: Code,
    /// Buyer first name at the time of purchase.
    pub first_name: String,
    /// Attempted amount.
    pub amount: Centavos,
    /// Purchase outcome.
    pub outcome: Result<PurchaseReceipt, SalesError>,
}

struct AwardLoyaltyPoint;

impl RecordPatch<CustomerRecord> for AwardLoyaltyPoint {
    fn apply_to(&self, rec: &mut CustomerRecord) {
        if let CustomerKind::Regular { loyalty_points } = &mut rec.kind {
            *loyalty_points = loyalty_points.saturating_add(1);
        }
    }
}

struct DebitDeposit(Centavos);

impl RecordPatch<CustomerRecord> for DebitDeposit {
    fn apply_to(&self, rec: &mut CustomerRecord) {
        if let CustomerKind::Renter { deposit } = &mut rec.kind {
            *deposit -= self.0;
        }
    }
}

/// A named restaurant owning its customer registry and sales total.
#[derive(Debug)]
pub struct Restaurant {
    name: String,
    registry: CustomerRegistry,
    total_sales: Centavos,
    policy: SalesPolicy,
}

impl Restaurant {
    /// Restaurant with default capacities and sales policy.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, RegistryConfig::default(), SalesPolicy::default())
    }

    /// Restaurant with explicit registry capacities and sales policy.
    pub fn with_config(
        name: impl Into<String>,
        registry: RegistryConfig,
        policy: SalesPolicy,
    ) -> Self {
        Self {
            name: name.into(),
            registry: CustomerRegistry::with_config(registry),
            total_sales: 0,
            policy,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sum of every successful purchase.
    pub fn total_sales(&self) -> Centavos {
        self.total_sales
    }

    /// Purchase and simulation rules in effect.
    pub fn policy(&self) -> &SalesPolicy {
        &self.policy
    }

    /// Customer records.
    pub fn registry(&self) -> &CustomerRegistry {
        &self.registry
    }

    /// Mutable customer records, for adds, renames, and deletes.
    pub fn registry_mut(&mut self) -> &mut CustomerRegistry {
        &mut self.registry
    }

    /// Charges `amount` to the customer with `code`.
    ///
    /// Regular customers always pay and earn one loyalty point. Renters pay
    /// from their deposit, which may dip below zero but never below
    /// [`SalesPolicy::renter_deposit_floor`]. The amount must be positive.
    /// Nothing changes on error.
    pub fn purchase(
        &mut self,
        code: Code,
        amount: Centavos,
    ) -> Result<PurchaseReceipt, SalesError> {
        if amount <= 0 {
            warn!("event=purchase status=rejected code={code} reason=invalid_amount");
            return Err(SalesError::InvalidAmount(amount));
        }
        let total_sales = self
            .total_sales
            .checked_add(amount)
            .ok_or(SalesError::InvalidAmount(amount))?;
        let kind = self
            .registry
            .find(code)
            .map(|rec| rec.kind.clone())
            .ok_or(StoreError::NotFound(code))?;
        match kind {
            CustomerKind::Regular { .. } => {
                self.registry.apply(code, &AwardLoyaltyPoint)?;
            }
            CustomerKind::Renter { deposit } => {
                let floor = self.policy.renter_deposit_floor;
                if deposit.checked_sub(amount).is_none_or(|left| left < floor) {
                    warn!(
                        "event=purchase status=rejected code={code} deposit={} amount={}",
                        format_centavos(deposit),
                        format_centavos(amount)
                    );
                    return Err(SalesError::DepositFloor {
                        code,
                        deposit,
                        amount,
                    });
                }
                self.registry.apply(code, &DebitDeposit(amount))?;
            }
        }

        self.total_sales = total_sales;
        info!(
            "event=purchase status=ok code={code} amount={} total_sales={}",
            format_centavos(amount),
            format_centavos(self.total_sales)
        );

        let customer = self
            .registry
            .find(code)
            .cloned()
            .ok_or(StoreError::NotFound(code))?;
        Ok(PurchaseReceipt {
            amount,
            customer,
            total_sales: self.total_sales,
        })
    }

    /// Picks the buyers for one simulation run: a random regular customer
    /// for the regular amount, then a random renter for each renter amount.
    ///
    /// Requires at least one record in each category. Nothing is charged.
    pub fn plan_simulation<R: Rng>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<(Code, Centavos)>, SalesError> {
        if self.registry.regular().is_empty() {
            return Err(SalesError::NoRegularCustomers);
        }
        if self.registry.renters().is_empty() {
            return Err(SalesError::NoRenters);
        }

        let mut plan = vec![(Category::Regular, self.policy.simulated_regular_amount)];
        plan.extend(
            self.policy
                .simulated_renter_amounts
                .iter()
                .map(|amount| (Category::Renter, *amount)),
        );

        Ok(plan
            .into_iter()
            .map(|(category, amount)| {
                let records = self.registry.store(category).list();
                (records[rng.gen_range(0..records.len())].code, amount)
            })
            .collect())
    }

    /// Attempts one planned purchase and records its outcome.
    pub fn simulate_step(&mut self, code: Code, amount: Centavos) -> SimulatedPurchase {
        let first_name = self
            .registry
            .find(code)
            .map(|rec| rec.first_name.clone())
            .unwrap_or_default();
        let outcome = self.purchase(code, amount);
        SimulatedPurchase {
            code,
            first_name,
            amount,
            outcome,
        }
    }

    /// Runs one regular purchase and two renter purchases against randomly
    /// chosen customers.
    ///
    /// Individual purchase failures are reported in the returned steps and
    /// do not stop the run.
    pub fn simulate_sales<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<SimulatedPurchase>, SalesError> {
        let plan = self.plan_simulation(rng)?;
        Ok(plan
            .into_iter()
            .map(|(code, amount)| self.simulate_step(code, amount))
            .collect())
    }
}
