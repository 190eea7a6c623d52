//! Storage layer for Flow Sight
//!
//! JSON file repositories with atomic writes. The [`Storage`] coordinator
//! answers every collaborator query the projection engine makes.

pub mod accounts;
pub mod cards;
pub mod file_io;
pub mod income;
pub mod init;
pub mod recurring;
pub mod settings;

pub use accounts::AccountRepository;
pub use cards::CardRepository;
pub use file_io::{read_json, write_json_atomic};
pub use income::IncomeRepository;
pub use init::initialize_storage;
pub use recurring::RecurringPaymentRepository;
pub use settings::SettingRepository;

use tracing::debug;

use crate::config::paths::FlowPaths;
use crate::error::FlowResult;
use crate::models::{
    BankAccount, CardMonthlyTotal, CreditCard, CreditCardId, IncomeSource, MonthlyIncomeRecord,
    RecurringPayment, YearMonth,
};
use crate::projection::{AccountStore, CardStore, IncomeStore, RecurringPaymentStore, SettingStore};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FlowPaths,
    pub accounts: AccountRepository,
    pub income: IncomeRepository,
    pub recurring_payments: RecurringPaymentRepository,
    pub cards: CardRepository,
    pub settings: SettingRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FlowPaths) -> FlowResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            accounts: AccountRepository::new(paths.accounts_file()),
            income: IncomeRepository::new(paths.income_file()),
            recurring_payments: RecurringPaymentRepository::new(paths.recurring_payments_file()),
            cards: CardRepository::new(paths.cards_file()),
            settings: SettingRepository::new(paths.settings_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &FlowPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> FlowResult<()> {
        self.accounts.load()?;
        self.income.load()?;
        self.recurring_payments.load()?;
        self.cards.load()?;
        self.settings.load()?;
        debug!(data_dir = %self.paths.data_dir().display(), "loaded stores");
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> FlowResult<()> {
        self.accounts.save()?;
        self.income.save()?;
        self.recurring_payments.save()?;
        self.cards.save()?;
        self.settings.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

impl AccountStore for Storage {
    fn active_accounts(&self) -> FlowResult<Vec<BankAccount>> {
        self.accounts.get_active()
    }
}

impl IncomeStore for Storage {
    fn active_sources(&self) -> FlowResult<Vec<IncomeSource>> {
        self.income.get_active()
    }

    fn records_for_month(&self, year_month: YearMonth) -> FlowResult<Vec<MonthlyIncomeRecord>> {
        self.income.records_for_month(year_month)
    }
}

impl RecurringPaymentStore for Storage {
    fn active_payments(&self) -> FlowResult<Vec<RecurringPayment>> {
        self.recurring_payments.get_active()
    }
}

impl CardStore for Storage {
    fn cards(&self) -> FlowResult<Vec<CreditCard>> {
        self.cards.get_all()
    }

    fn totals_for_card(&self, card_id: CreditCardId) -> FlowResult<Vec<CardMonthlyTotal>> {
        self.cards.totals_for_card(card_id)
    }
}

impl SettingStore for Storage {
    fn get(&self, key: &str) -> FlowResult<Option<String>> {
        self.settings.get(key)
    }
}
