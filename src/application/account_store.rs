use crate::domain::account::{Account, Amount, Balance};
use crate::domain::ports::SnapshotStore;
use crate::domain::snapshot::SnapshotRecord;
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// Handle to an account inside one `AccountStore`.
///
/// Accounts are never removed, so a handle stays valid for the life of the
/// store that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountRef(usize);

/// The in-process registry of accounts.
///
/// `AccountStore` is the only authoritative owner of account state. It keeps
/// accounts in insertion order, enforces the unique (owner, nickname) rule and
/// validates every amount before mutating a balance.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Creates a new, empty account store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Opens a new account with the given starting balance.
    ///
    /// Fails with `DuplicateAccount` when the (owner, nickname) pair is taken and
    /// with `InvalidAmount` when the starting balance is negative.
    pub fn create_account(
        &mut self,
        owner: &str,
        nickname: &str,
        starting_balance: Decimal,
    ) -> Result<AccountRef> {
        if self.find_account(owner, nickname).is_ok() {
            return Err(LedgerError::DuplicateAccount {
                owner: owner.to_string(),
                nickname: nickname.to_string(),
            });
        }
        let balance = Balance::new(starting_balance)?;
        self.accounts.push(Account::new(owner, nickname, balance));
        debug!(owner, nickname, %balance, "account created");
        Ok(AccountRef(self.accounts.len() - 1))
    }

    pub fn find_account(&self, owner: &str, nickname: &str) -> Result<AccountRef> {
        self.accounts
            .iter()
            .position(|account| account.is_match(owner, nickname))
            .map(AccountRef)
            .ok_or_else(|| LedgerError::AccountNotFound {
                owner: owner.to_string(),
                nickname: nickname.to_string(),
            })
    }

    pub fn get(&self, account: AccountRef) -> Option<&Account> {
        self.accounts.get(account.0)
    }

    /// Adds `amount` to the account and returns the new balance.
    ///
    /// The balance is left untouched when the amount is not positive or the sum
    /// would overflow.
    pub fn deposit(&mut self, account: AccountRef, amount: Decimal) -> Result<Balance> {
        let amount = Amount::new(amount)?;
        let account = self.get_mut(account)?;
        let balance = account.deposit(amount)?;
        debug!(
            owner = account.owner(),
            nickname = account.nickname(),
            %amount,
            %balance,
            "deposit applied"
        );
        Ok(balance)
    }

    /// Removes `amount` from the account and returns the new balance.
    ///
    /// The balance is left untouched when the amount is not positive or exceeds
    /// the available funds.
    pub fn withdraw(&mut self, account: AccountRef, amount: Decimal) -> Result<Balance> {
        let amount = Amount::new(amount)?;
        let account = self.get_mut(account)?;
        let balance = account.withdraw(amount)?;
        debug!(
            owner = account.owner(),
            nickname = account.nickname(),
            %amount,
            %balance,
            "withdrawal applied"
        );
        Ok(balance)
    }

    /// Iterates over the accounts in insertion order.
    ///
    /// The iterator borrows the store, so it can be cloned or requested again to
    /// restart the listing.
    pub fn list(&self) -> impl Iterator<Item = &Account> + Clone + '_ {
        self.accounts.iter()
    }

    /// Replaces the store contents with the accounts held by `source`.
    ///
    /// A missing snapshot loads as empty. Unreadable content, duplicate
    /// accounts or negative balances leave the store empty and return
    /// `SnapshotLoad`.
    pub fn load_from_snapshot(&mut self, source: &dyn SnapshotStore) -> Result<usize> {
        self.accounts.clear();

        let records = source.load().inspect_err(|e| warn!(error = %e, "snapshot not loaded"))?;

        let mut loaded = AccountStore::new();
        for record in records {
            loaded
                .create_account(&record.owner, &record.name, record.balance)
                .map_err(|e| {
                    let e = LedgerError::SnapshotLoad(format!("invalid record: {e}"));
                    warn!(error = %e, "snapshot not loaded");
                    e
                })?;
        }

        self.accounts = loaded.accounts;
        info!(accounts = self.accounts.len(), "snapshot loaded");
        Ok(self.accounts.len())
    }

    /// Writes every account to `destination`, replacing its previous contents.
    pub fn save_to_snapshot(&self, destination: &dyn SnapshotStore) -> Result<()> {
        let records: Vec<SnapshotRecord> = self.accounts.iter().map(SnapshotRecord::from).collect();
        destination.save(&records)?;
        info!(accounts = records.len(), "snapshot saved");
        Ok(())
    }

    fn get_mut(&mut self, account: AccountRef) -> Result<&mut Account> {
        self.accounts
            .get_mut(account.0)
            .ok_or(LedgerError::ForeignAccountRef)
    }
}
