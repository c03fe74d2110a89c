use std::collections::HashMap;

use lazy_static::lazy_static;

/// Canonical major asset class labels
pub const ASSET_CLASS_EQUITY: &str = "equity";
pub const ASSET_CLASS_COMMODITIES: &str = "commodities";
pub const ASSET_CLASS_FIXED_INCOME: &str = "fixed_income";
pub const ASSET_CLASS_ALTERNATIVES: &str = "alternatives";

lazy_static! {
    /// Label variants observed in the security master, mapped to their
    /// canonical form. Labels not listed here pass through unchanged.
    static ref ASSET_CLASS_REMAP: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("equity", ASSET_CLASS_EQUITY);
        m.insert("equty", ASSET_CLASS_EQUITY);
        m.insert("equities", ASSET_CLASS_EQUITY);
        m.insert("commodities", ASSET_CLASS_COMMODITIES);
        m.insert("fixed_income", ASSET_CLASS_FIXED_INCOME);
        m.insert("fixed income", ASSET_CLASS_FIXED_INCOME);
        m.insert("fixed income corporate", ASSET_CLASS_FIXED_INCOME);
        m.insert("fixed income government", ASSET_CLASS_FIXED_INCOME);
        m.insert("alternatives", ASSET_CLASS_ALTERNATIVES);
        m
    };
}

/// Collapses a raw security-master asset class label to its canonical form.
/// Unrecognized labels are returned unchanged.
pub fn normalize_asset_class(label: &str) -> String {
    match ASSET_CLASS_REMAP.get(label.trim().to_lowercase().as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_variants_collapse() {
        assert_eq!(normalize_asset_class("equty"), "equity");
        assert_eq!(normalize_asset_class("fixed income corporate"), "fixed_income");
        assert_eq!(normalize_asset_class("fixed income government"), "fixed_income");
        assert_eq!(normalize_asset_class("Fixed Income"), "fixed_income");
        assert_eq!(normalize_asset_class("EQUITY"), "equity");
    }

    #[test]
    fn test_unrecognized_labels_pass_through() {
        assert_eq!(normalize_asset_class("commodities"), "commodities");
        assert_eq!(normalize_asset_class("real estate"), "real estate");
    }
}
