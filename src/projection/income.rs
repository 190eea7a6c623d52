//! Income resolution
//!
//! Decides whether an income source pays on a given day, and how much.

use chrono::{Datelike, NaiveDate};

use crate::models::{DetailKind, ProjectionDetail, YearMonth};

use super::lookup::Lookups;
use super::snapshot::{IncomePlan, PlannedIncome};
use super::source::IncomeStore;

/// The income detail `income` contributes on `date`, if any
///
/// A monthly source pays its recorded amount for the month when one exists and
/// its base amount otherwise. One-time sources always pay the base amount.
pub fn resolve_income<S: IncomeStore + ?Sized>(
    income: &PlannedIncome,
    date: NaiveDate,
    lookups: &mut Lookups<'_, S>,
) -> Option<ProjectionDetail> {
    let source = &income.source;

    match income.plan {
        IncomePlan::Monthly { pay_day } => {
            if date.day() != pay_day {
                return None;
            }
            let amount = lookups
                .actual_income(source.id, YearMonth::from_date(date))
                .unwrap_or(source.base_amount);
            Some(ProjectionDetail::new(
                DetailKind::Income,
                format!("収入: {}", source.name),
                amount,
            ))
        }
        IncomePlan::OneTime(schedule) => schedule.lands_on(date).then(|| {
            ProjectionDetail::new(
                DetailKind::Income,
                format!("臨時収入: {}", source.name),
                source.base_amount,
            )
        }),
    }
}
