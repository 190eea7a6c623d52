//! Per-call lookup cache
//!
//! Monthly income records and card totals are fetched at most once per
//! projection call: income records per month, card totals per card. Failed
//! lookups are logged and remembered as failed, never propagated.

use std::collections::HashMap;

use tracing::warn;

use crate::models::{CreditCardId, IncomeSourceId, Money, YearMonth};

use super::source::{CardStore, IncomeStore};

/// Memoized secondary lookups for one projection
pub struct Lookups<'s, S: ?Sized> {
    store: &'s S,
    income_records: HashMap<YearMonth, Option<HashMap<IncomeSourceId, Money>>>,
    card_totals: HashMap<CreditCardId, Option<HashMap<YearMonth, Money>>>,
}

impl<'s, S: ?Sized> Lookups<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self {
            store,
            income_records: HashMap::new(),
            card_totals: HashMap::new(),
        }
    }
}

impl<S: IncomeStore + ?Sized> Lookups<'_, S> {
    /// Recorded income of `source_id` for `month`
    ///
    /// `None` when no record exists or the lookup failed.
    pub fn actual_income(&mut self, source_id: IncomeSourceId, month: YearMonth) -> Option<Money> {
        let store = self.store;
        let by_source = self
            .income_records
            .entry(month)
            .or_insert_with(|| match store.records_for_month(month) {
                Ok(records) => {
                    let mut by_source = HashMap::new();
                    for record in records {
                        by_source
                            .entry(record.income_source_id)
                            .or_insert(record.actual_amount);
                    }
                    Some(by_source)
                }
                Err(err) => {
                    warn!(%month, error = %err, "monthly income lookup failed, using base amounts");
                    None
                }
            });

        by_source.as_ref()?.get(&source_id).copied()
    }
}

impl<S: CardStore + ?Sized> Lookups<'_, S> {
    /// Billed usage of `card_id` for `month`
    ///
    /// `None` when no total exists or the lookup failed.
    pub fn card_total(&mut self, card_id: CreditCardId, month: YearMonth) -> Option<Money> {
        let store = self.store;
        let by_month = self
            .card_totals
            .entry(card_id)
            .or_insert_with(|| match store.totals_for_card(card_id) {
                Ok(totals) => {
                    let mut by_month = HashMap::new();
                    for total in totals {
                        by_month.entry(total.year_month).or_insert(total.total_amount);
                    }
                    Some(by_month)
                }
                Err(err) => {
                    warn!(card = %card_id, error = %err, "card total lookup failed, treating as unbilled");
                    None
                }
            });

        by_month.as_ref()?.get(&month).copied()
    }
}
