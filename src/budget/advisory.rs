use rust_decimal::Decimal;

/// Savings rate (in percent) below which the budget is flagged.
pub const SAVINGS_TARGET: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryLevel {
    Warning,
    Healthy,
}

impl AdvisoryLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "Warning",
            Self::Healthy => "Healthy",
        }
    }
}

impl std::fmt::Display for AdvisoryLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn advisory_level(savings_rate: Decimal) -> AdvisoryLevel {
    if savings_rate < SAVINGS_TARGET {
        AdvisoryLevel::Warning
    } else {
        AdvisoryLevel::Healthy
    }
}
