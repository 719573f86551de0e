//! Shared primitive IDs, money units, and customer categories.

use serde::{Deserialize, Serialize};

/// Customer code; unique within a category for the life of the process.
pub type Code = u32;
/// Money amount in centavos (1/100 Php).
pub type Centavos = i64;

/// Base offset for regular customer codes (1001, 1002, ...).
pub const REGULAR_CODE_BASE: Code = 1000;
/// Base offset for renter codes (2001, 2002, ...).
pub const RENTER_CODE_BASE: Code = 2000;
/// Last code in the regular range.
pub const REGULAR_CODE_MAX: Code = 1999;
/// Last code in the renter range.
pub const RENTER_CODE_MAX: Code = 2999;
/// Highest code the console accepts as input.
pub const MAX_CODE: Code = RENTER_CODE_MAX;

/// Partition of customer records with its own code range and store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Walk-in customer collecting loyalty points.
    Regular,
    /// Customer paying from a prepaid deposit.
    Renter,
}

impl Category {
    /// Offset added to the per-category counter when assigning codes.
    pub fn code_base(self) -> Code {
        match self {
            Self::Regular => REGULAR_CODE_BASE,
            Self::Renter => RENTER_CODE_BASE,
        }
    }

    /// Last code the category may ever hand out.
    pub fn code_max(self) -> Code {
        match self {
            Self::Regular => REGULAR_CODE_MAX,
            Self::Renter => RENTER_CODE_MAX,
        }
    }

    /// Maps a code to the category whose store owns it.
    ///
    /// Ranges are contiguous: everything below [`RENTER_CODE_BASE`] is
    /// regular, everything from it upward is a renter code. Codes that were
    /// never assigned still route somewhere and simply miss in that store.
    pub fn route_by_code(code: Code) -> Self {
        if code < RENTER_CODE_BASE {
            Self::Regular
        } else {
            Self::Renter
        }
    }

    /// Human-readable label used by reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Regular => "Regular Customer",
            Self::Renter => "Renter",
        }
    }
}

/// Formats centavos as a plain two-decimal amount, e.g. `-1234` -> `-12.34`.
pub fn format_centavos(amount: Centavos) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

/// Whole pesos to centavos.
pub const fn php(pesos: i64) -> Centavos {
    pesos * 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routing_partition_is_contiguous() {
        assert_eq!(Category::route_by_code(1000), Category::Regular);
        assert_eq!(Category::route_by_code(1999), Category::Regular);
        assert_eq!(Category::route_by_code(2000), Category::Renter);
        assert_eq!(Category::route_by_code(2999), Category::Renter);
        assert_eq!(Category::route_by_code(9999), Category::Renter);
        assert_eq!(Category::route_by_code(0), Category::Regular);
    }

    #[test]
    fn last_code_of_each_range_routes_home() {
        for category in [Category::Regular, Category::Renter] {
            assert_eq!(Category::route_by_code(category.code_max()), category);
            assert_eq!(Category::route_by_code(category.code_base() + 1), category);
        }
    }

    #[test]
    fn centavos_format_with_two_decimals() {
        assert_eq!(format_centavos(0), "0.00");
        assert_eq!(format_centavos(php(3000)), "3000.00");
        assert_eq!(format_centavos(7505), "75.05");
        assert_eq!(format_centavos(-150_050), "-1500.50");
        assert_eq!(format_centavos(-5), "-0.05");
    }
}
