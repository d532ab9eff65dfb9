pub mod account;
pub mod menu;
mod money;
mod result;
pub mod session;
mod settings;

pub use account::{BankAccount, CurrentAccount};
pub use money::{Money, MoneyError};
pub use result::Result;
pub use settings::Settings;
