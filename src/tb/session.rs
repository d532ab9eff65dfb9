use crate::account::{AccountError, BankAccount, CurrentAccount, Receipt};
use crate::menu::{self, MenuChoice};
use crate::money::MoneyError;
use crate::{Money, Result, Settings};

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

/// Reaching the end of input at any prompt ends the session the same way choosing Exit does,
/// minus the farewell, since no further choice can ever be read.
type Flow = ControlFlow<()>;

/// Greets the user, opens an account in the name they give, and runs a session on it.
///
/// Returns the account as it stood when the session ended, or `None` if input closed before a
/// holder name was entered.
pub fn start<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    settings: Settings,
) -> Result<Option<CurrentAccount>> {
    let welcome = format!("🏦 Welcome to {}! 🏦", settings.bank_name);
    writeln!(output, "\n{welcome}")?;
    writeln!(output, "{}", "=".repeat(30))?;

    write!(output, "\nEnter account holder name: ")?;
    output.flush()?;

    let holder = match read_line(&mut input)? {
        Some(holder) => holder,
        None => return Ok(None),
    };

    log::debug!("Opening account for {holder:?} with {}", settings.opening_balance);
    let account = CurrentAccount::new(holder, settings.opening_balance);

    let mut session = Session::new(account, input, output, settings);
    session.run()?;

    return Ok(Some(session.into_account()));
}

/// Reads one line, stripping only its terminator. `None` once input is exhausted.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();

    if input.read_line(&mut line)? == 0 {
        log::debug!("Input closed");
        return Ok(None);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    return Ok(Some(line));
}

/// The interactive menu loop, owning the account for its whole lifetime
pub struct Session<A, R, W> {
    account: A,
    input: R,
    output: W,
    settings: Settings,
}

impl<A, R, W> Session<A, R, W>
where
    A: BankAccount,
    R: BufRead,
    W: Write,
{
    pub fn new(account: A, input: R, output: W, settings: Settings) -> Self {
        return Self {
            account,
            input,
            output,
            settings,
        };
    }

    pub fn into_account(self) -> A {
        return self.account;
    }

    /// Runs until the user exits or input closes. Only terminal I/O failures are returned.
    pub fn run(&mut self) -> Result {
        loop {
            self.display_menu()?;

            let choice = match self.prompt("\nEnter your choice (1-4): ")? {
                Some(choice) => choice,
                None => break,
            };

            let flow = match choice.parse::<MenuChoice>() {
                Ok(MenuChoice::Exit) => {
                    writeln!(
                        self.output,
                        "\n👋 Thank you for using {}! Goodbye!",
                        self.settings.bank_name
                    )?;
                    break;
                }
                Ok(choice) => self.handle_choice(choice)?,
                Err(e) => {
                    log::info!("{e}");
                    writeln!(self.output, "\n❌ Invalid choice. Please try again.")?;
                    Flow::Continue(())
                }
            };

            if flow.is_break() || self.prompt("\nPress Enter to continue...")?.is_none() {
                break;
            }
        }

        self.output.flush()?;
        log::debug!("Session ended with balance {}", self.account.check_balance());

        return Ok(());
    }

    fn display_menu(&mut self) -> Result {
        let header = format!("=== {} Menu ===", self.settings.bank_name);

        writeln!(self.output, "\n{header}")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{choice}")?;
        }
        writeln!(self.output, "{}", "=".repeat(header.chars().count()))?;

        return Ok(());
    }

    fn handle_choice(&mut self, choice: MenuChoice) -> Result<Flow> {
        log::debug!("Handling menu choice: {choice:?}");

        match choice {
            MenuChoice::CheckBalance => {
                let balance = self.money(self.account.check_balance());
                writeln!(
                    self.output,
                    "\n💰 Current balance for {}: {balance}",
                    self.account.holder()
                )?;
            }
            MenuChoice::Deposit => {
                let amount = match self.read_amount("deposit")? {
                    Some(amount) => amount,
                    None => return Ok(Flow::Break(())),
                };

                match self.account.deposit(amount) {
                    Ok(receipt) => self.confirm("Deposited", &receipt)?,
                    Err(e) => self.reject(&e)?,
                }
            }
            MenuChoice::Withdraw => {
                let amount = match self.read_amount("withdraw")? {
                    Some(amount) => amount,
                    None => return Ok(Flow::Break(())),
                };

                match self.account.withdraw(amount) {
                    Ok(receipt) => self.confirm("Withdrawn", &receipt)?,
                    Err(e) => self.reject(&e)?,
                }
            }
            MenuChoice::Exit => return Ok(Flow::Break(())),
        }

        return Ok(Flow::Continue(()));
    }

    /// Prompts until the input parses as an amount; there is no retry limit
    fn read_amount(&mut self, operation: &str) -> Result<Option<Money>> {
        let prompt = format!(
            "\nEnter amount to {operation}: {}",
            self.settings.currency_symbol
        );

        loop {
            let line = match self.prompt(&prompt)? {
                Some(line) => line,
                None => return Ok(None),
            };

            match menu::parse_amount(&line) {
                Ok(amount) => return Ok(Some(amount)),
                Err(e) => {
                    log::info!("{e}");
                    writeln!(self.output, "❌ Please enter a valid number")?;
                }
            }
        }
    }

    fn confirm(&mut self, verb: &str, receipt: &Receipt) -> Result {
        let amount = self.money(receipt.amount);
        let balance = self.money(receipt.balance);

        writeln!(self.output, "\n✅ {verb} {amount}. New balance: {balance}")?;

        return Ok(());
    }

    fn reject(&mut self, err: &anyhow::Error) -> Result {
        log::info!("Rejected: {err}");

        let message = if let Some(e) = err.downcast_ref::<AccountError>() {
            match e {
                AccountError::InvalidAmount(_) => e.to_string(),
                AccountError::OverdraftExceeded(limit) => format!(
                    "Insufficient funds. Overdraft limit is {}",
                    self.money(limit.abs())
                ),
            }
        } else if let Some(MoneyError::Overflow(..)) = err.downcast_ref::<MoneyError>() {
            "Amount is too large to process".to_string()
        } else {
            err.to_string()
        };

        writeln!(self.output, "\n❌ Error: {message}")?;

        return Ok(());
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        return read_line(&mut self.input);
    }

    fn money(&self, amount: Money) -> String {
        return format!("{}{}", self.settings.currency_symbol, amount);
    }
}
