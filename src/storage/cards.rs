//! Credit card repository
//!
//! Persists cards and their billed monthly totals to cards.json.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{FlowError, FlowResult};
use crate::models::{CardMonthlyTotal, CreditCard, CreditCardId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CardData {
    #[serde(default)]
    cards: Vec<CreditCard>,
    #[serde(default)]
    totals: Vec<CardMonthlyTotal>,
}

/// Repository for cards and card monthly totals
pub struct CardRepository {
    path: PathBuf,
    cards: RwLock<HashMap<CreditCardId, CreditCard>>,
    totals: RwLock<Vec<CardMonthlyTotal>>,
}

impl CardRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            cards: RwLock::new(HashMap::new()),
            totals: RwLock::new(Vec::new()),
        }
    }

    pub fn load(&self) -> FlowResult<()> {
        let file_data: CardData = read_json(&self.path)?;

        let mut cards = self
            .cards
            .write()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut totals = self
            .totals
            .write()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        cards.clear();
        for card in file_data.cards {
            cards.insert(card.id, card);
        }
        *totals = file_data.totals;

        Ok(())
    }

    pub fn save(&self) -> FlowResult<()> {
        let totals = self
            .totals
            .read()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = CardData {
            cards: self.get_all()?,
            totals: totals.clone(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get all cards, ordered by name
    pub fn get_all(&self) -> FlowResult<Vec<CreditCard>> {
        let cards = self
            .cards
            .read()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = cards.values().cloned().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(list)
    }

    /// Insert or update a card
    pub fn upsert(&self, card: CreditCard) -> FlowResult<()> {
        let mut cards = self
            .cards
            .write()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        cards.insert(card.id, card);
        Ok(())
    }

    /// Insert or update a monthly total
    pub fn upsert_total(&self, total: CardMonthlyTotal) -> FlowResult<()> {
        let mut totals = self
            .totals
            .write()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match totals.iter_mut().find(|t| t.id == total.id) {
            Some(existing) => *existing = total,
            None => totals.push(total),
        }
        Ok(())
    }

    /// Every total recorded for `card_id`, in file order
    pub fn totals_for_card(&self, card_id: CreditCardId) -> FlowResult<Vec<CardMonthlyTotal>> {
        let totals = self
            .totals
            .read()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(totals
            .iter()
            .filter(|t| t.credit_card_id == card_id)
            .cloned()
            .collect())
    }

    pub fn count(&self) -> FlowResult<usize> {
        let cards = self
            .cards
            .read()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(cards.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, YearMonth};
    use tempfile::TempDir;

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cards.json");
        let repo = CardRepository::new(path.clone());

        let visa = CreditCard::new("Visa", 15, 10);
        let loan = CreditCard::same_month("Car loan", 27);
        let may = YearMonth::new(2024, 5).unwrap();
        repo.upsert_total(CardMonthlyTotal::new(visa.id, may, Money::from_minor(150000)))
            .unwrap();
        repo.upsert_total(CardMonthlyTotal::new(loan.id, may, Money::from_minor(30000)))
            .unwrap();
        repo.upsert(visa.clone()).unwrap();
        repo.upsert(loan).unwrap();
        repo.save().unwrap();

        let repo2 = CardRepository::new(path);
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 2);
        let totals = repo2.totals_for_card(visa.id).unwrap();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].total_amount, Money::from_minor(150000));

        let cards = repo2.get_all().unwrap();
        assert_eq!(cards[0].name, "Car loan");
        assert_eq!(cards[0].closing_day, None);
    }

    #[test]
    fn test_unknown_card_has_no_totals() {
        let temp_dir = TempDir::new().unwrap();
        let repo = CardRepository::new(temp_dir.path().join("cards.json"));
        repo.load().unwrap();

        assert!(repo.totals_for_card(CreditCardId::new()).unwrap().is_empty());
    }
}
