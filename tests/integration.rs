use assert_cmd::Command;
use predicates::prelude::*;

fn toy_bank() -> Command {
    Command::cargo_bin("toy-bank").unwrap()
}

#[test]
fn deposit_then_check_balance() {
    toy_bank()
        .write_stdin("Ada\n2\n500\n\n1\n\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("🏦 Welcome to Toy Bank! 🏦"))
        .stdout(predicate::str::contains("Enter account holder name: "))
        .stdout(predicate::str::contains(
            "✅ Deposited £500.00. New balance: £1500.00",
        ))
        .stdout(predicate::str::contains(
            "💰 Current balance for Ada: £1500.00",
        ))
        .stdout(predicate::str::contains(
            "👋 Thank you for using Toy Bank! Goodbye!",
        ));
}

#[test]
fn withdrawals_respect_overdraft_limit() {
    toy_bank()
        .write_stdin("Ada\n3\n2001\n\n3\n2000\n\n3\n0.01\n\n1\n\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "❌ Error: Insufficient funds. Overdraft limit is £1000.00",
        ))
        .stdout(predicate::str::contains(
            "✅ Withdrawn £2000.00. New balance: £-1000.00",
        ))
        .stdout(predicate::str::contains(
            "💰 Current balance for Ada: £-1000.00",
        ));
}

#[test]
fn non_positive_amounts_are_rejected() {
    toy_bank()
        .write_stdin("Ada\n2\n-5\n\n3\n-5\n\n1\n\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "❌ Error: Deposit amount must be positive",
        ))
        .stdout(predicate::str::contains(
            "❌ Error: Withdrawal amount must be positive",
        ))
        .stdout(predicate::str::contains(
            "💰 Current balance for Ada: £1000.00",
        ));
}

#[test]
fn unparseable_amount_is_reprompted() {
    toy_bank()
        .write_stdin("Ada\n2\nabc\n25\n\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ Please enter a valid number"))
        .stdout(predicate::str::contains(
            "✅ Deposited £25.00. New balance: £1025.00",
        ));
}

#[test]
fn withdrawal_a_fraction_past_limit_is_reprompted() {
    toy_bank()
        .write_stdin("Ada\n3\n2000.00004\n2000.0001\n\n1\n\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ Please enter a valid number"))
        .stdout(predicate::str::contains(
            "❌ Error: Insufficient funds. Overdraft limit is £1000.00",
        ))
        .stdout(predicate::str::contains(
            "💰 Current balance for Ada: £1000.00",
        ));
}

#[test]
fn invalid_menu_choice() {
    toy_bank()
        .write_stdin("Ada\n7\n\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "❌ Invalid choice. Please try again.",
        ))
        .stdout(predicate::str::contains("Press Enter to continue..."));
}

#[test]
fn closed_input_still_exits_successfully() {
    toy_bank()
        .write_stdin("Ada\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye").not());

    toy_bank().write_stdin("").assert().success();
}

#[test]
fn logs_stay_off_stdout() {
    toy_bank()
        .env("RUST_LOG", "debug")
        .write_stdin("Ada\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("Opening account"));
}
