use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxBracket {
    pub label: &'static str,
    pub min_income: i64,
    pub max_income: Option<i64>,
    pub tax_rate: Decimal,
}

impl TaxBracket {
    /// Number of income units the bracket covers, bounds inclusive.
    /// `None` for the open-ended top bracket.
    pub fn width(&self) -> Option<i64> {
        self.max_income.map(|max| max - self.min_income + 1)
    }
}

const fn percent(rate: u32) -> Decimal {
    Decimal::from_parts(rate, 0, 0, false, 2)
}

/// Personal income tax schedule, lowest bracket first.
pub const PERSONAL_INCOME_BRACKETS: [TaxBracket; 5] = [
    TaxBracket {
        label: "0-150,000",
        min_income: 0,
        max_income: Some(150_000),
        tax_rate: percent(0),
    },
    TaxBracket {
        label: "150,001-500,000",
        min_income: 150_001,
        max_income: Some(500_000),
        tax_rate: percent(10),
    },
    TaxBracket {
        label: "500,001-1,000,000",
        min_income: 500_001,
        max_income: Some(1_000_000),
        tax_rate: percent(15),
    },
    TaxBracket {
        label: "1,000,001-2,000,000",
        min_income: 1_000_001,
        max_income: Some(2_000_000),
        tax_rate: percent(20),
    },
    TaxBracket {
        label: "2,000,001 ขึ้นไป",
        min_income: 2_000_001,
        max_income: None,
        tax_rate: percent(35),
    },
];
