//! Recurring payment and card bill resolution

use chrono::{Datelike, NaiveDate};

use crate::models::{CreditCard, DetailKind, ProjectionDetail, RecurringPayment, YearMonth};

use super::lookup::Lookups;
use super::source::CardStore;

/// The expense `payment` books on `date`, if any
pub fn resolve_recurring(payment: &RecurringPayment, date: NaiveDate) -> Option<ProjectionDetail> {
    if date.day() != payment.payment_day {
        return None;
    }
    if !payment.is_due_in(YearMonth::from_date(date)) {
        return None;
    }

    Some(ProjectionDetail::new(
        DetailKind::RecurringPayment,
        format!("固定支出: {}", payment.name),
        payment.amount,
    ))
}

/// The bill `card` withdraws on `date`, if any
///
/// Only positive totals for the billed usage month produce a payment.
pub fn resolve_card<S: CardStore + ?Sized>(
    card: &CreditCard,
    date: NaiveDate,
    lookups: &mut Lookups<'_, S>,
) -> Option<ProjectionDetail> {
    if date.day() != card.payment_day {
        return None;
    }

    let billed = card.billing_month_for(YearMonth::from_date(date));
    let total = lookups.card_total(card.id, billed)?;
    if !total.is_positive() {
        return None;
    }

    Some(ProjectionDetail::new(
        DetailKind::CardPayment,
        format!("カード支払い: {}", card.name),
        total,
    ))
}
