use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetCategory {
    pub name: String,
    pub amount: Decimal,
}

impl BudgetCategory {
    pub fn new(name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    /// Index of the category matching `name` (case-insensitive) in a slice.
    pub fn position_by_name(categories: &[BudgetCategory], name: &str) -> Option<usize> {
        let lower = name.to_lowercase();
        categories.iter().position(|c| c.name.to_lowercase() == lower)
    }
}

impl std::fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
