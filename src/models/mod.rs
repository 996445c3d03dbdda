mod category;
mod state;

pub use category::BudgetCategory;
pub use state::{BudgetState, DEFAULT_INCOME};

#[cfg(test)]
mod tests;
