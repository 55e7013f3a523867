use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

use super::AccountSource;
use crate::{
    errors::{ForecastError, Result},
    ledger::{Account, AccountId, Balance, Balances},
    utils::ensure_dir,
};

const TMP_SUFFIX: &str = "tmp";

/// Account store persisted as a single JSON document.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
    document: StoreDocument,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreDocument {
    /// Highest identifier ever handed out, so ids of removed accounts are not reused.
    #[serde(default, alias = "next_id")]
    last_id: AccountId,
    #[serde(default)]
    accounts: Vec<StoredAccount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredAccount {
    account: Account,
    #[serde(default)]
    balances: Balances,
}

impl JsonStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let document = if path.exists() {
            let data = fs::read_to_string(&path)?;
            let document: StoreDocument = serde_json::from_str(&data)?;
            for stored in &document.accounts {
                stored.account.validate()?;
                if stored.account.id().is_none() {
                    return Err(ForecastError::InvalidAccount(format!(
                        "stored account `{}` has no identifier",
                        stored.account.name()
                    )));
                }
            }
            document
        } else {
            StoreDocument::default()
        };
        debug!(
            path = %path.display(),
            accounts = document.accounts.len(),
            "opened account store"
        );
        Ok(Self { path, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stores a new account and returns it with its assigned identifier.
    pub fn insert_account(&mut self, account: Account) -> Result<Account> {
        account.validate()?;
        let id = self
            .document
            .accounts
            .iter()
            .filter_map(|stored| stored.account.id())
            .max()
            .unwrap_or(0)
            .max(self.document.last_id)
            + 1;
        let account = account.with_id(id);
        self.document.last_id = id;
        self.document.accounts.push(StoredAccount {
            account: account.clone(),
            balances: Balances::new(),
        });
        self.save()?;
        Ok(account)
    }

    /// Appends a balance to an account after checking it fits the account lifecycle.
    pub fn insert_balance(&mut self, id: AccountId, balance: Balance) -> Result<()> {
        let stored = self
            .document
            .accounts
            .iter_mut()
            .find(|stored| stored.account.id() == Some(id))
            .ok_or(ForecastError::AccountNotFound(id))?;
        stored.account.validate_balance(&balance)?;
        stored.balances.push(balance);
        self.save()
    }

    pub fn select_account(&self, id: AccountId) -> Result<Account> {
        self.find(id).map(|stored| stored.account.clone())
    }

    fn find(&self, id: AccountId) -> Result<&StoredAccount> {
        self.document
            .accounts
            .iter()
            .find(|stored| stored.account.id() == Some(id))
            .ok_or(ForecastError::AccountNotFound(id))
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.document)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl AccountSource for JsonStore {
    fn select_accounts(&self) -> Result<Vec<Account>> {
        Ok(self
            .document
            .accounts
            .iter()
            .map(|stored| stored.account.clone())
            .collect())
    }

    fn select_account_balances(&self, id: AccountId) -> Result<Balances> {
        self.find(id).map(|stored| stored.balances.clone())
    }
}

pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

pub(crate) fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
