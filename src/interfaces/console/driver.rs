use super::command::{Command, MENU};
use super::terminal::Terminal;
use crate::application::account_store::{AccountRef, AccountStore};
use crate::domain::ports::SnapshotStore;
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use std::io::Write;
use std::str::FromStr;
use tracing::warn;

/// How a console session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Saved,
    Discarded,
}

#[derive(Debug, Clone, Copy)]
enum Transfer {
    Deposit,
    Withdraw,
}

/// Drives the menu loop against an injected `AccountStore`.
///
/// Domain errors are rendered and the operator is re-prompted. Only console
/// I/O failures and a failed save on `Q` end the session with an error.
pub struct ConsoleDriver<'a, T: Terminal, W: Write> {
    store: &'a mut AccountStore,
    snapshot: &'a dyn SnapshotStore,
    terminal: T,
    out: W,
}

impl<'a, T: Terminal, W: Write> ConsoleDriver<'a, T, W> {
    pub fn new(
        store: &'a mut AccountStore,
        snapshot: &'a dyn SnapshotStore,
        terminal: T,
        out: W,
    ) -> Self {
        Self {
            store,
            snapshot,
            terminal,
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Loads persisted accounts and runs the menu loop until the operator quits.
    pub fn run(&mut self) -> Result<Exit> {
        self.load()?;
        loop {
            writeln!(self.out, "{MENU}")?;
            self.out.flush()?;

            let Some(key) = self.terminal.read_key()? else {
                writeln!(self.out, "End of input, exiting without saving.")?;
                return Ok(Exit::Discarded);
            };

            match Command::from_key(key) {
                Command::Add => self.add_account()?,
                Command::Deposit => self.transfer(Transfer::Deposit)?,
                Command::Withdraw => self.transfer(Transfer::Withdraw)?,
                Command::List => self.list()?,
                Command::SaveAndQuit => {
                    self.save()?;
                    return Ok(Exit::Saved);
                }
                Command::QuitWithoutSaving => {
                    writeln!(self.out, "Exiting without saving changes.")?;
                    return Ok(Exit::Discarded);
                }
                Command::Invalid(_) => writeln!(self.out, "Invalid character entered")?,
            }
        }
    }

    fn load(&mut self) -> Result<()> {
        match self.store.load_from_snapshot(self.snapshot) {
            Ok(0) => writeln!(self.out, "Note: no saved accounts found, starting empty.")?,
            Ok(n) => writeln!(self.out, "Loaded {n} account(s).")?,
            Err(e) => writeln!(self.out, "⚠️  Warning: {e}. Starting with no accounts.")?,
        }
        Ok(())
    }

    fn add_account(&mut self) -> Result<()> {
        let (owner, nickname) = loop {
            let Some(owner) = self.prompt_field("Account owner name: ")? else {
                return self.aborted();
            };
            let Some(nickname) = self.prompt_field("Enter a nickname for the account: ")? else {
                return self.aborted();
            };
            if self.store.find_account(&owner, &nickname).is_ok() {
                writeln!(self.out, "❗ That owner/name combo already exists. Please try again.\n")?;
            } else {
                break (owner, nickname);
            }
        };

        loop {
            let Some(balance) = self.prompt_amount("Deposit a starting balance: ")? else {
                return self.aborted();
            };
            match self.store.create_account(&owner, &nickname, balance) {
                Ok(_) => {
                    writeln!(self.out, "✅ Created account “{nickname}” for {owner}.\n")?;
                    return Ok(());
                }
                Err(e) => self.reject(&e)?,
            }
        }
    }

    fn transfer(&mut self, kind: Transfer) -> Result<()> {
        let (header, label) = match kind {
            Transfer::Deposit => ("#### DEPOSITING FUNDS #####", "Amount to deposit: "),
            Transfer::Withdraw => ("#### WITHDRAWING FUNDS #####", "Amount to withdraw: "),
        };
        writeln!(self.out, "{header}")?;

        let Some(account) = self.select_account()? else {
            return self.aborted();
        };

        loop {
            let Some(amount) = self.prompt_amount(label)? else {
                return self.aborted();
            };
            let result = match kind {
                Transfer::Deposit => self.store.deposit(account, amount),
                Transfer::Withdraw => self.store.withdraw(account, amount),
            };
            match result {
                Ok(balance) => {
                    let (owner, nickname) = self.names(account);
                    let amount = amount.normalize();
                    match kind {
                        Transfer::Deposit => writeln!(
                            self.out,
                            "✅ Deposited ${amount} into {nickname} for {owner}.\nNew balance is: ${balance}"
                        )?,
                        Transfer::Withdraw => writeln!(
                            self.out,
                            "✅ Withdrew ${amount} from {nickname}.\nRemaining balance is: ${balance}"
                        )?,
                    }
                    return Ok(());
                }
                Err(e) => self.reject(&e)?,
            }
        }
    }

    fn select_account(&mut self) -> Result<Option<AccountRef>> {
        loop {
            let Some(owner) = self.prompt_field("Account owner name: ")? else {
                return Ok(None);
            };
            let Some(nickname) = self.prompt_field("Account nickname: ")? else {
                return Ok(None);
            };
            match self.store.find_account(&owner, &nickname) {
                Ok(account) => return Ok(Some(account)),
                Err(_) => writeln!(
                    self.out,
                    "❗ That owner/name combo does not exist. Please try again.\n"
                )?,
            }
        }
    }

    fn list(&mut self) -> Result<()> {
        writeln!(self.out, "#### ACCOUNTS ####")?;
        if self.store.is_empty() {
            writeln!(self.out, "No accounts yet.")?;
        }
        for account in self.store.list() {
            writeln!(
                self.out,
                "Account: {} | Owner: {} | Balance: ${}",
                account.nickname(),
                account.owner(),
                account.balance()
            )?;
        }
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        match self.store.save_to_snapshot(self.snapshot) {
            Ok(()) => {
                writeln!(self.out, "💾 Saved {} account(s).", self.store.len())?;
                Ok(())
            }
            Err(e) => {
                writeln!(self.out, "❗ Save failed: {e}")?;
                Err(e)
            }
        }
    }

    fn names(&self, account: AccountRef) -> (String, String) {
        self.store
            .get(account)
            .map(|a| (a.owner().to_string(), a.nickname().to_string()))
            .unwrap_or_default()
    }

    /// Prompts for a text field. Empty input or end of input aborts the command.
    fn prompt_field(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        let answer = self.terminal.read_line()?;
        Ok(answer
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty()))
    }

    fn prompt_amount(&mut self, label: &str) -> Result<Option<Decimal>> {
        loop {
            let Some(text) = self.prompt_field(label)? else {
                return Ok(None);
            };
            match parse_amount(&text) {
                Some(amount) => return Ok(Some(amount)),
                None => writeln!(self.out, "❗ '{text}' is not a valid amount. Please try again.")?,
            }
        }
    }

    fn reject(&mut self, error: &LedgerError) -> Result<()> {
        warn!(%error, "request rejected");
        writeln!(self.out, "❗ {error}. Please try again.")?;
        Ok(())
    }

    fn aborted(&mut self) -> Result<()> {
        writeln!(self.out, "Cancelled, returning to the menu.\n")?;
        Ok(())
    }
}

/// Parses an operator-entered amount such as `25`, `0.5` or `$12.75`.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let text = input.trim();
    let text = text.strip_prefix('$').unwrap_or(text).trim();
    Decimal::from_str(text).ok()
}
