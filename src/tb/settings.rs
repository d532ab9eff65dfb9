use crate::Money;

/// Fixed parameters of a banking session
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bank_name: &'static str,
    pub currency_symbol: char,
    pub opening_balance: Money,
}

impl Default for Settings {
    fn default() -> Self {
        return Self {
            bank_name: "Toy Bank",
            currency_symbol: '£',
            opening_balance: Money::units(1000),
        };
    }
}
