use serde::{Deserialize, Serialize};

/// Amount every taxpayer deducts before brackets apply.
pub const PERSONAL_ALLOWANCE: i64 = 60_000;

/// Ceiling on the combined donation deduction, however many donations are claimed.
pub const DONATION_ALLOWANCE_CAP: i64 = 100_000;

/// Allowance categories the calculator knows how to deduct.
///
/// Only donations are recognised today. Any other category parses to `None`
/// and contributes nothing to the deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllowanceKind {
    Donation,
}

impl AllowanceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Donation => "donation",
        }
    }

    /// Parses a category name, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "donation" => Some(Self::Donation),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allowance {
    pub allowance_type: String,
    pub amount: i64,
}

impl Allowance {
    pub fn new(
        allowance_type: impl Into<String>,
        amount: i64,
    ) -> Self {
        Self {
            allowance_type: allowance_type.into(),
            amount,
        }
    }

    /// The recognised category of this allowance, if any.
    pub fn kind(&self) -> Option<AllowanceKind> {
        AllowanceKind::parse(&self.allowance_type)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_exact_name() {
        assert_eq!(AllowanceKind::parse("donation"), Some(AllowanceKind::Donation));
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(AllowanceKind::parse("DONATION"), Some(AllowanceKind::Donation));
        assert_eq!(AllowanceKind::parse("  Donation \t"), Some(AllowanceKind::Donation));
    }

    #[test]
    fn parse_rejects_unknown_categories() {
        assert_eq!(AllowanceKind::parse("k-receipt"), None);
        assert_eq!(AllowanceKind::parse(""), None);
        assert_eq!(AllowanceKind::parse("donations"), None);
    }

    #[test]
    fn kind_round_trips_through_as_str() {
        let allowance = Allowance::new(AllowanceKind::Donation.as_str(), 1_000);

        assert_eq!(allowance.kind(), Some(AllowanceKind::Donation));
    }
}
