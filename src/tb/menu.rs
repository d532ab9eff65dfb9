use crate::{Money, Result};

use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("Could not parse amount: {0:?}")]
    ParseFailure(String),

    #[error("Invalid menu choice: {0:?}")]
    InvalidMenuChoice(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CheckBalance,
    Deposit,
    Withdraw,
    Exit,
}

impl MenuChoice {
    /// In display order, numbered from 1
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::CheckBalance,
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::Exit,
    ];

    pub fn number(&self) -> usize {
        return match self {
            MenuChoice::CheckBalance => 1,
            MenuChoice::Deposit => 2,
            MenuChoice::Withdraw => 3,
            MenuChoice::Exit => 4,
        };
    }

    pub fn label(&self) -> &'static str {
        return match self {
            MenuChoice::CheckBalance => "Check Balance",
            MenuChoice::Deposit => "Make Deposit",
            MenuChoice::Withdraw => "Make Withdrawal",
            MenuChoice::Exit => "Exit",
        };
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}. {}", self.number(), self.label());
    }
}

/// Only exact matches are accepted, so `" 1"` or `"01"` are invalid choices
impl FromStr for MenuChoice {
    type Err = MenuError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        return MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.number().to_string() == s)
            .ok_or_else(|| MenuError::InvalidMenuChoice(s.to_string()));
    }
}

/// Parses an amount typed at a menu prompt
pub fn parse_amount(input: &str) -> Result<Money> {
    let amount = Money::parse(input).map_err(|e| {
        log::debug!("Rejecting amount input {input:?}: {e}");
        MenuError::ParseFailure(input.to_string())
    })?;

    return Ok(amount);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_choices() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::CheckBalance));
        assert_eq!("2".parse::<MenuChoice>(), Ok(MenuChoice::Deposit));
        assert_eq!("3".parse::<MenuChoice>(), Ok(MenuChoice::Withdraw));
        assert_eq!("4".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
    }

    #[test]
    fn parse_invalid_choices() {
        for input in ["", "0", "5", " 1", "1 ", "01", "one", "exit"] {
            assert_eq!(
                input.parse::<MenuChoice>(),
                Err(MenuError::InvalidMenuChoice(input.to_string()))
            );
        }
    }

    #[test]
    fn display_choices() {
        let lines: Vec<String> = MenuChoice::ALL.iter().map(|c| c.to_string()).collect();

        assert_eq!(
            lines,
            vec![
                "1. Check Balance",
                "2. Make Deposit",
                "3. Make Withdrawal",
                "4. Exit",
            ]
        );
    }

    #[test]
    fn parse_amounts() {
        assert_eq!(parse_amount("500").unwrap(), Money::units(500));
        assert_eq!(parse_amount("-5.0").unwrap(), Money::units(-5));
    }

    #[test]
    fn parse_amount_failure() {
        for input in ["abc", "0.00001", "2000.00004", "1__000"] {
            let err = parse_amount(input).unwrap_err();

            assert_eq!(
                err.downcast_ref::<MenuError>(),
                Some(&MenuError::ParseFailure(input.to_string()))
            );
        }
    }
}
