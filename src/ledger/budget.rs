use serde::{Deserialize, Serialize};

/// Weekly income, fixed costs and discretionary budgets, in whole currency units.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BudgetSettings {
    pub weekly_income: i64,
    pub fuel_cost: i64,
    pub internet_cost: i64,
    pub food_budget: i64,
    pub misc_budget: i64,
    /// Food actually spent this week, entered by hand.
    #[serde(default)]
    pub actual_food: i64,
}

impl BudgetSettings {
    pub fn fixed_expenses(&self) -> i64 {
        self.fuel_cost.saturating_add(self.internet_cost)
    }

    /// Updates one field by name, returning `false` for an unknown field.
    pub fn set_field(&mut self, field: &str, value: i64) -> bool {
        let slot = match field.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "weekly_income" | "income" => &mut self.weekly_income,
            "fuel_cost" | "fuel" => &mut self.fuel_cost,
            "internet_cost" | "internet" => &mut self.internet_cost,
            "food_budget" | "food" => &mut self.food_budget,
            "misc_budget" | "misc" => &mut self.misc_budget,
            "actual_food" => &mut self.actual_food,
            _ => return false,
        };
        *slot = value;
        true
    }
}
