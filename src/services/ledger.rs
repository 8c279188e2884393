//! Budget ledger service
//!
//! Owns every budget, keyed by category name, plus the global alert. The
//! `Overall` budget always exists and receives every expense; a category
//! budget additionally receives the expenses recorded against it.
//!
//! Operations never print. Each returns an outcome value that the shell
//! renders, and records what happened through `tracing`.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use crate::error::{BuddyError, BuddyResult};
use crate::models::{
    AlertChange, AlertNotice, AlertThreshold, Budget, DateRange, Expense, ExpenseEdit,
    ListedExpense, Money,
};

/// Name of the budget that mirrors every expense
pub const OVERALL: &str = "Overall";

/// Budgets by category name, with the mandatory Overall budget
#[derive(Debug, Clone)]
pub struct BudgetLedger {
    budgets: BTreeMap<String, Budget>,
    alert: AlertThreshold,
}

/// Result of adding an expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseAdded {
    pub expense: Expense,
    /// Category the expense was also recorded under
    pub category: Option<String>,
    /// Category that was requested but does not exist
    pub category_missing: Option<String>,
    pub alert: Option<AlertNotice>,
}

/// Result of deleting an expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDeleted {
    pub expense: Expense,
    /// Category budgets the expense was also removed from
    pub categories: Vec<String>,
}

/// Result of editing an expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseEdited {
    pub index: usize,
    pub before: Expense,
    pub after: Expense,
    /// Category budgets whose copy was updated as well
    pub categories: Vec<String>,
    pub alert: Option<AlertNotice>,
}

/// Result of setting a budget limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSet {
    pub name: String,
    pub limit: Money,
    pub created: bool,
}

/// Result of editing a budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetEdited {
    pub previous_name: String,
    pub name: String,
    pub limit: Money,
    pub limit_changed: bool,
}

/// Limit, spending and remaining amount of one budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetStatus {
    pub name: String,
    pub limit: Money,
    pub spent: Money,
    pub remaining: Money,
}

impl BudgetStatus {
    fn of(budget: &Budget) -> Self {
        Self {
            name: budget.name().to_string(),
            limit: budget.limit(),
            spent: budget.total_expenses(),
            remaining: budget.remaining(),
        }
    }

    /// Check if this is the Overall budget
    pub fn is_overall(&self) -> bool {
        self.name == OVERALL
    }
}

/// Answer to a check-budget request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetCheck {
    Found(BudgetStatus),
    NotFound(String),
}

/// A search hit with its 1-based insertion index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseMatch {
    pub index: usize,
    pub expense: Expense,
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

impl Default for BudgetLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl BudgetLedger {
    /// Create a ledger holding only the Overall budget, with the alert disabled
    pub fn new() -> Self {
        let mut budgets = BTreeMap::new();
        budgets.insert(OVERALL.to_string(), Budget::unlimited(OVERALL));
        info!("budget ledger initialized with {} budget", OVERALL);

        Self {
            budgets,
            alert: AlertThreshold::disabled(),
        }
    }

    /// Create a ledger with an initial alert threshold
    pub fn with_alert(amount: Money) -> BuddyResult<Self> {
        let mut ledger = Self::new();
        ledger.alert = AlertThreshold::at(amount)?;
        Ok(ledger)
    }

    fn overall(&self) -> BuddyResult<&Budget> {
        self.budgets.get(OVERALL).ok_or(BuddyError::NoOverallBudget)
    }

    fn overall_mut(&mut self) -> BuddyResult<&mut Budget> {
        self.budgets
            .get_mut(OVERALL)
            .ok_or(BuddyError::NoOverallBudget)
    }

    /// Look up a budget by its exact (case-sensitive) name
    pub fn budget(&self, name: &str) -> Option<&Budget> {
        self.budgets.get(name)
    }

    /// All budgets, ordered by name
    pub fn budgets(&self) -> impl Iterator<Item = &Budget> {
        self.budgets.values()
    }

    /// Get the current alert threshold
    pub fn alert(&self) -> &AlertThreshold {
        &self.alert
    }

    /// Record an expense
    ///
    /// The expense always lands in Overall. A non-blank category that exists
    /// receives a copy; one that does not is reported in `category_missing`
    /// and skipped. The alert is evaluated against the new Overall total.
    pub fn add_expense(
        &mut self,
        category: &str,
        amount: Money,
        description: &str,
        timestamp: NaiveDateTime,
    ) -> BuddyResult<ExpenseAdded> {
        let expense = Expense::new(amount, description, timestamp)?;

        if !self.budgets.contains_key(OVERALL) {
            warn!("{} budget was missing, recreating it", OVERALL);
            self.budgets
                .insert(OVERALL.to_string(), Budget::unlimited(OVERALL));
        }
        self.total_after(Money::zero(), expense.amount())?;
        self.overall_mut()?.add_expense(expense.clone());

        let mut recorded_under = None;
        let mut category_missing = None;
        let category = category.trim();
        if !is_blank(category) && category != OVERALL {
            match self.budgets.get_mut(category) {
                Some(budget) => {
                    budget.add_expense(expense.clone());
                    recorded_under = Some(category.to_string());
                }
                None => {
                    warn!(
                        category,
                        "budget category not found, expense added to {} only", OVERALL
                    );
                    category_missing = Some(category.to_string());
                }
            }
        }

        info!(%expense, category = recorded_under.as_deref(), "expense added");

        Ok(ExpenseAdded {
            expense,
            category: recorded_under,
            category_missing,
            alert: self.check_alert(),
        })
    }

    /// Set a budget limit, creating the budget if needed
    ///
    /// A blank category targets Overall.
    pub fn set_budget(&mut self, category: &str, amount: Money) -> BuddyResult<BudgetSet> {
        let amount = amount.ensure_non_negative("Budget amount")?;
        let name = match category.trim() {
            "" => OVERALL,
            name => name,
        };

        let created = match self.budgets.get_mut(name) {
            Some(budget) => {
                budget.set_limit(amount)?;
                info!(budget = name, limit = %amount, "budget limit updated");
                false
            }
            None => {
                self.budgets
                    .insert(name.to_string(), Budget::new(name, amount)?);
                info!(budget = name, limit = %amount, "budget created");
                true
            }
        };

        Ok(BudgetSet {
            name: name.to_string(),
            limit: amount,
            created,
        })
    }

    /// Change the limit and/or the name of an existing budget
    pub fn edit_budget(
        &mut self,
        current: &str,
        new_limit: Option<Money>,
        new_name: Option<&str>,
    ) -> BuddyResult<BudgetEdited> {
        let current = current.trim();
        let new_name = new_name.map(str::trim);

        if new_limit.is_none() && new_name.is_none() {
            return Err(BuddyError::invalid_input(
                "At least one of a new amount or a new name must be provided",
            ));
        }
        if is_blank(current) {
            return Err(BuddyError::invalid_input("Budget name cannot be empty"));
        }
        if !self.budgets.contains_key(current) {
            return Err(BuddyError::category_not_found(current));
        }
        if let Some(limit) = new_limit {
            limit.ensure_non_negative("Budget amount")?;
        }

        let rename_to = match new_name {
            Some(name) if is_blank(name) => {
                return Err(BuddyError::invalid_input("Budget name cannot be empty"))
            }
            Some(name) if name == current => None,
            Some(_) if current == OVERALL => {
                return Err(BuddyError::invalid_input(format!(
                    "The {} budget cannot be renamed",
                    OVERALL
                )))
            }
            Some(name) if name == OVERALL => {
                return Err(BuddyError::invalid_input(format!(
                    "'{}' is reserved for the overall budget",
                    OVERALL
                )))
            }
            Some(name) if self.budgets.contains_key(name) => {
                return Err(BuddyError::Duplicate(name.to_string()))
            }
            Some(name) => Some(name.to_string()),
            None => None,
        };

        let mut budget = self
            .budgets
            .remove(current)
            .ok_or_else(|| BuddyError::category_not_found(current))?;

        if let Some(limit) = new_limit {
            budget.set_limit(limit)?;
        }
        if let Some(name) = &rename_to {
            budget.rename(name.as_str());
            info!(from = current, to = %name, "budget renamed");
        }

        let edited = BudgetEdited {
            previous_name: current.to_string(),
            name: budget.name().to_string(),
            limit: budget.limit(),
            limit_changed: new_limit.is_some(),
        };
        if new_limit.is_some() {
            info!(budget = %edited.name, limit = %edited.limit, "budget limit updated");
        }

        self.budgets.insert(budget.name().to_string(), budget);
        Ok(edited)
    }

    /// Delete an expense by its most-recent-first index in Overall
    ///
    /// The first equal expense of every other budget is removed as well.
    pub fn delete_expense(&mut self, index: usize) -> BuddyResult<ExpenseDeleted> {
        let expense = self.overall_mut()?.delete_expense(index)?;
        info!(index, %expense, "expense deleted from {}", OVERALL);

        let mut categories = Vec::new();
        for (name, budget) in self.budgets.iter_mut() {
            if name == OVERALL {
                continue;
            }
            if budget.remove_matching(&expense).is_some() {
                info!(category = %name, "expense also deleted from category");
                categories.push(name.clone());
            }
        }

        Ok(ExpenseDeleted {
            expense,
            categories,
        })
    }

    /// Edit an expense by its most-recent-first index in Overall
    ///
    /// The first equal expense of every other budget receives the same edit.
    pub fn edit_expense(&mut self, index: usize, edit: &ExpenseEdit) -> BuddyResult<ExpenseEdited> {
        let before = self.overall()?.get(index)?.clone();
        let after = before.edited(edit)?;
        self.total_after(before.amount(), after.amount())?;

        let overall = self.overall_mut()?;
        overall.replace_expense(index, after.clone())?;

        let mut categories = Vec::new();
        for (name, budget) in self.budgets.iter_mut() {
            if name == OVERALL {
                continue;
            }
            if budget.replace_matching(&before, after.clone()) {
                categories.push(name.clone());
            }
        }
        info!(index, from = %before, to = %after, "expense edited");

        Ok(ExpenseEdited {
            index,
            before,
            after,
            categories,
            alert: self.check_alert(),
        })
    }

    /// Report limit, spending and remaining amount
    ///
    /// A blank category reports Overall. An unknown category is not an error.
    pub fn check_budget(&self, category: &str) -> BuddyResult<BudgetCheck> {
        let category = category.trim();
        if is_blank(category) {
            return Ok(BudgetCheck::Found(BudgetStatus::of(self.overall()?)));
        }

        Ok(match self.budgets.get(category) {
            Some(budget) => BudgetCheck::Found(BudgetStatus::of(budget)),
            None => {
                warn!(category, "budget category not found");
                BudgetCheck::NotFound(category.to_string())
            }
        })
    }

    /// Case-insensitive search of Overall descriptions, in insertion order
    pub fn find_expense(&self, keyword: &str) -> BuddyResult<Vec<ExpenseMatch>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(BuddyError::invalid_input("Keyword cannot be empty"));
        }

        let matches: Vec<ExpenseMatch> = self
            .overall()?
            .expenses()
            .iter()
            .enumerate()
            .filter(|(_, expense)| expense.matches_keyword(keyword))
            .map(|(position, expense)| ExpenseMatch {
                index: position + 1,
                expense: expense.clone(),
            })
            .collect();

        debug!(keyword, hits = matches.len(), "expense search");
        Ok(matches)
    }

    /// Overall total once `removed` is taken out and `added` put in
    ///
    /// Fails when the total would not fit, before anything is changed.
    fn total_after(&self, removed: Money, added: Money) -> BuddyResult<Money> {
        let current: Money = self.overall()?.expenses().iter().map(Expense::amount).sum();
        current
            .checked_sub(removed)
            .and_then(|total| total.checked_add(added))
            .ok_or_else(|| {
                BuddyError::invalid_amount(
                    "Total expenses would exceed the largest amount that can be tracked",
                )
            })
    }

    /// Total spending recorded in Overall
    pub fn total_expenses(&self) -> Money {
        self.overall()
            .map(Budget::total_expenses)
            .unwrap_or_default()
    }

    /// Overall's expenses, most recent first, restricted to `range`
    pub fn list_all_expenses(&self, range: &DateRange) -> BuddyResult<Vec<ListedExpense<'_>>> {
        Ok(self.overall()?.listing(range))
    }

    /// Status of every budget: Overall first, then categories by name
    pub fn summary(&self) -> Vec<BudgetStatus> {
        let overall = self.budgets.get(OVERALL).map(BudgetStatus::of);
        let categories = self
            .budgets
            .values()
            .filter(|budget| budget.name() != OVERALL)
            .map(BudgetStatus::of);

        overall.into_iter().chain(categories).collect()
    }

    /// Set the alert threshold; zero disables it
    pub fn set_alert(&mut self, amount: Money) -> BuddyResult<AlertChange> {
        let change = self.alert.set(amount)?;
        info!(?change, "alert threshold changed");
        Ok(change)
    }

    /// Disable the alert
    pub fn remove_alert(&mut self) -> BuddyResult<AlertChange> {
        self.set_alert(Money::zero())
    }

    /// Evaluate the alert against the Overall total
    pub fn check_alert(&self) -> Option<AlertNotice> {
        let notice = self.alert.check(self.total_expenses());
        if let Some(notice) = &notice {
            warn!(threshold = %notice.threshold, total = %notice.total, "alert threshold exceeded");
        }
        notice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn dollars(cents: i64) -> Money {
        Money::from_cents(cents)
    }

    fn overall_len(ledger: &BudgetLedger) -> usize {
        ledger.budget(OVERALL).unwrap().len()
    }

    #[test]
    fn test_new_ledger_has_overall() {
        let ledger = BudgetLedger::new();
        let overall = ledger.budget(OVERALL).unwrap();
        assert_eq!(overall.limit(), Money::zero());
        assert!(overall.is_empty());
        assert!(!ledger.alert().is_enabled());
        assert_eq!(ledger.budgets().count(), 1);
    }

    #[test]
    fn test_add_without_category() {
        let mut ledger = BudgetLedger::new();
        let added = ledger
            .add_expense("", dollars(1550), "Lunch", at(5, 12))
            .unwrap();

        assert_eq!(added.category, None);
        assert_eq!(added.category_missing, None);
        assert_eq!(ledger.total_expenses(), dollars(1550));
        assert_eq!(overall_len(&ledger), 1);
    }

    #[test]
    fn test_add_rejects_invalid_expense() {
        let mut ledger = BudgetLedger::new();
        assert!(matches!(
            ledger.add_expense("", Money::zero(), "Lunch", at(5, 12)),
            Err(BuddyError::InvalidAmount(_))
        ));
        assert!(matches!(
            ledger.add_expense("", dollars(100), "  ", at(5, 12)),
            Err(BuddyError::InvalidInput(_))
        ));
        assert_eq!(overall_len(&ledger), 0);
    }

    #[test]
    fn test_add_unknown_category_lands_in_overall_only() {
        let mut ledger = BudgetLedger::new();
        ledger.set_budget("Transport", dollars(5000)).unwrap();

        let added = ledger
            .add_expense("Food", dollars(1550), "Lunch", at(5, 12))
            .unwrap();

        assert_eq!(added.category_missing.as_deref(), Some("Food"));
        assert_eq!(added.category, None);
        assert_eq!(overall_len(&ledger), 1);
        assert!(ledger.budget("Food").is_none());
        assert!(ledger.budget("Transport").unwrap().is_empty());
    }

    #[test]
    fn test_add_known_category_writes_both() {
        let mut ledger = BudgetLedger::new();
        ledger.set_budget("Food", dollars(10000)).unwrap();

        let added = ledger
            .add_expense("Food", dollars(1550), "Lunch", at(5, 12))
            .unwrap();

        assert_eq!(added.category.as_deref(), Some("Food"));
        let food = ledger.budget("Food").unwrap();
        assert_eq!(food.len(), 1);
        assert_eq!(food.total_expenses(), dollars(1550));
        assert_eq!(overall_len(&ledger), 1);
        assert_eq!(ledger.total_expenses(), dollars(1550));
    }

    #[test]
    fn test_add_to_overall_by_name_records_once() {
        let mut ledger = BudgetLedger::new();
        let added = ledger
            .add_expense(OVERALL, dollars(1550), "Lunch", at(5, 12))
            .unwrap();

        assert_eq!(added.category, None);
        assert_eq!(added.category_missing, None);
        assert_eq!(overall_len(&ledger), 1);
        assert_eq!(ledger.total_expenses(), dollars(1550));
    }

    #[test]
    fn test_add_rejects_total_overflow() {
        let mut ledger = BudgetLedger::new();
        let big = Money::from_cents(i64::MAX / 2);
        ledger.add_expense("", big, "Car", at(5, 12)).unwrap();
        ledger.add_expense("", big, "Boat", at(5, 13)).unwrap();

        let result = ledger.add_expense("", big, "House", at(5, 14));
        assert!(matches!(result, Err(BuddyError::InvalidAmount(_))));
        assert_eq!(overall_len(&ledger), 2);
        assert_eq!(ledger.total_expenses(), Money::from_cents(i64::MAX - 1));
    }

    #[test]
    fn test_edit_rejects_total_overflow() {
        let mut ledger = BudgetLedger::new();
        let big = Money::from_cents(i64::MAX / 2);
        ledger.add_expense("", big, "Car", at(5, 12)).unwrap();
        ledger.add_expense("", dollars(100), "Gum", at(5, 13)).unwrap();

        let edit = ExpenseEdit {
            amount: Some(big.checked_add(dollars(100)).unwrap()),
            ..ExpenseEdit::default()
        };
        assert!(matches!(
            ledger.edit_expense(1, &edit),
            Err(BuddyError::InvalidAmount(_))
        ));
        assert_eq!(
            ledger.budget(OVERALL).unwrap().get(1).unwrap().amount(),
            dollars(100)
        );
    }

    #[test]
    fn test_category_names_are_case_sensitive() {
        let mut ledger = BudgetLedger::new();
        ledger.set_budget("Food", dollars(10000)).unwrap();

        let added = ledger
            .add_expense("food", dollars(500), "Snack", at(5, 12))
            .unwrap();
        assert_eq!(added.category_missing.as_deref(), Some("food"));
        assert!(ledger.budget("Food").unwrap().is_empty());
    }

    #[test]
    fn test_example_scenario() {
        let mut ledger = BudgetLedger::new();

        let first = ledger
            .add_expense("Food", dollars(1550), "Lunch", at(5, 12))
            .unwrap();
        assert_eq!(first.category_missing.as_deref(), Some("Food"));
        assert_eq!(overall_len(&ledger), 1);
        assert_eq!(ledger.total_expenses(), dollars(1550));
        assert!(ledger.budget("Food").is_none());

        let set = ledger.set_budget("Food", dollars(10000)).unwrap();
        assert!(set.created);
        assert_eq!(ledger.budget("Food").unwrap().len(), 0);

        ledger
            .add_expense("Food", dollars(1550), "Lunch", at(5, 12))
            .unwrap();
        assert_eq!(overall_len(&ledger), 2);
        assert_eq!(ledger.total_expenses(), dollars(3000));
        let food = ledger.budget("Food").unwrap();
        assert_eq!(food.len(), 1);
        assert_eq!(food.total_expenses(), dollars(1550));
    }

    #[test]
    fn test_set_budget_blank_targets_overall() {
        let mut ledger = BudgetLedger::new();
        let set = ledger.set_budget("  ", dollars(100000)).unwrap();
        assert_eq!(set.name, OVERALL);
        assert!(!set.created);

        match ledger.check_budget("").unwrap() {
            BudgetCheck::Found(status) => {
                assert_eq!(status.name, OVERALL);
                assert_eq!(status.limit, dollars(100000));
                assert_eq!(status.remaining, dollars(100000));
            }
            other => panic!("unexpected check result: {:?}", other),
        }
    }

    #[test]
    fn test_set_budget_replaces_limit() {
        let mut ledger = BudgetLedger::new();
        assert!(ledger.set_budget("Food", dollars(10000)).unwrap().created);
        assert!(!ledger.set_budget("Food", dollars(20000)).unwrap().created);
        assert_eq!(ledger.budget("Food").unwrap().limit(), dollars(20000));
    }

    #[test]
    fn test_set_budget_negative_rejected() {
        let mut ledger = BudgetLedger::new();
        assert!(matches!(
            ledger.set_budget("Food", dollars(-1)),
            Err(BuddyError::InvalidAmount(_))
        ));
        assert!(ledger.budget("Food").is_none());
    }

    #[test]
    fn test_check_budget_remaining_clamped() {
        let mut ledger = BudgetLedger::new();
        ledger.set_budget("Food", dollars(1000)).unwrap();
        ledger
            .add_expense("Food", dollars(2500), "Dinner", at(5, 19))
            .unwrap();

        let BudgetCheck::Found(status) = ledger.check_budget("Food").unwrap() else {
            panic!("Food should exist");
        };
        assert_eq!(status.spent, dollars(2500));
        assert_eq!(status.remaining, Money::zero());
    }

    #[test]
    fn test_check_budget_unknown_is_not_an_error() {
        let ledger = BudgetLedger::new();
        assert_eq!(
            ledger.check_budget("Travel").unwrap(),
            BudgetCheck::NotFound("Travel".into())
        );
    }

    #[test]
    fn test_delete_removes_display_position_and_category_copy() {
        let mut ledger = BudgetLedger::new();
        ledger.set_budget("Food", dollars(10000)).unwrap();
        ledger.set_budget("Transport", dollars(10000)).unwrap();
        ledger
            .add_expense("Food", dollars(1550), "Lunch", at(5, 12))
            .unwrap();
        ledger
            .add_expense("Transport", dollars(4000), "Taxi", at(5, 14))
            .unwrap();
        ledger
            .add_expense("", dollars(300), "Gum", at(5, 15))
            .unwrap();

        // Most recent first: 1 = Gum, 2 = Taxi, 3 = Lunch
        let deleted = ledger.delete_expense(2).unwrap();
        assert_eq!(deleted.expense.description(), "Taxi");
        assert_eq!(deleted.categories, vec!["Transport".to_string()]);
        assert!(ledger.budget("Transport").unwrap().is_empty());
        assert_eq!(ledger.budget("Food").unwrap().len(), 1);
        assert_eq!(overall_len(&ledger), 2);

        let deleted = ledger.delete_expense(1).unwrap();
        assert_eq!(deleted.expense.description(), "Gum");
        assert!(deleted.categories.is_empty());
    }

    #[test]
    fn test_delete_removes_one_duplicate_per_category() {
        let mut ledger = BudgetLedger::new();
        ledger.set_budget("Coffee", dollars(5000)).unwrap();
        ledger
            .add_expense("Coffee", dollars(450), "Latte", at(6, 9))
            .unwrap();
        ledger
            .add_expense("Coffee", dollars(450), "Latte", at(6, 9))
            .unwrap();

        let deleted = ledger.delete_expense(1).unwrap();
        assert_eq!(deleted.categories, vec!["Coffee".to_string()]);
        assert_eq!(ledger.budget("Coffee").unwrap().len(), 1);
        assert_eq!(overall_len(&ledger), 1);
    }

    #[test]
    fn test_delete_invalid_index() {
        let mut ledger = BudgetLedger::new();
        ledger
            .add_expense("", dollars(100), "Gum", at(5, 12))
            .unwrap();

        assert_eq!(
            ledger.delete_expense(0),
            Err(BuddyError::InvalidIndex { index: 0, len: 1 })
        );
        assert_eq!(
            ledger.delete_expense(2),
            Err(BuddyError::InvalidIndex { index: 2, len: 1 })
        );
        assert_eq!(overall_len(&ledger), 1);
    }

    #[test]
    fn test_edit_expense_updates_category_copy() {
        let mut ledger = BudgetLedger::new();
        ledger.set_budget("Food", dollars(10000)).unwrap();
        ledger
            .add_expense("Food", dollars(1550), "Lunch", at(5, 12))
            .unwrap();

        let edit = ExpenseEdit {
            amount: Some(dollars(2500)),
            description: Some("Dinner".into()),
            ..ExpenseEdit::default()
        };
        let edited = ledger.edit_expense(1, &edit).unwrap();

        assert_eq!(edited.before.description(), "Lunch");
        assert_eq!(edited.after.description(), "Dinner");
        assert_eq!(edited.categories, vec!["Food".to_string()]);
        assert_eq!(ledger.budget("Food").unwrap().expenses()[0], edited.after);
        assert_eq!(ledger.total_expenses(), dollars(2500));
    }

    #[test]
    fn test_edit_expense_keeps_position() {
        let mut ledger = BudgetLedger::new();
        ledger
            .add_expense("", dollars(100), "First", at(5, 8))
            .unwrap();
        ledger
            .add_expense("", dollars(200), "Second", at(5, 9))
            .unwrap();

        let edit = ExpenseEdit {
            description: Some("Renamed".into()),
            ..ExpenseEdit::default()
        };
        ledger.edit_expense(2, &edit).unwrap();

        let overall = ledger.budget(OVERALL).unwrap();
        assert_eq!(overall.expenses()[0].description(), "Renamed");
        assert_eq!(overall.expenses()[1].description(), "Second");
    }

    #[test]
    fn test_edit_expense_errors_leave_ledger_untouched() {
        let mut ledger = BudgetLedger::new();
        ledger
            .add_expense("", dollars(100), "Gum", at(5, 8))
            .unwrap();

        assert!(matches!(
            ledger.edit_expense(1, &ExpenseEdit::default()),
            Err(BuddyError::InvalidInput(_))
        ));
        assert!(matches!(
            ledger.edit_expense(
                3,
                &ExpenseEdit {
                    amount: Some(dollars(5)),
                    ..ExpenseEdit::default()
                }
            ),
            Err(BuddyError::InvalidIndex { index: 3, len: 1 })
        ));
        assert_eq!(ledger.total_expenses(), dollars(100));
    }

    #[test]
    fn test_edit_budget_limit_and_name() {
        let mut ledger = BudgetLedger::new();
        ledger.set_budget("Food", dollars(10000)).unwrap();
        ledger
            .add_expense("Food", dollars(1550), "Lunch", at(5, 12))
            .unwrap();

        let edited = ledger
            .edit_budget("Food", Some(dollars(50000)), Some("Groceries"))
            .unwrap();
        assert_eq!(edited.previous_name, "Food");
        assert_eq!(edited.name, "Groceries");
        assert_eq!(edited.limit, dollars(50000));

        assert!(ledger.budget("Food").is_none());
        let groceries = ledger.budget("Groceries").unwrap();
        assert_eq!(groceries.name(), "Groceries");
        assert_eq!(groceries.len(), 1);
    }

    #[test]
    fn test_edit_budget_errors() {
        let mut ledger = BudgetLedger::new();
        ledger.set_budget("Food", dollars(10000)).unwrap();
        ledger.set_budget("Fun", dollars(10000)).unwrap();

        assert!(matches!(
            ledger.edit_budget("Food", None, None),
            Err(BuddyError::InvalidInput(_))
        ));
        assert!(matches!(
            ledger.edit_budget("Travel", Some(dollars(1)), None),
            Err(BuddyError::CategoryNotFound(_))
        ));
        assert!(matches!(
            ledger.edit_budget("Food", Some(dollars(-1)), None),
            Err(BuddyError::InvalidAmount(_))
        ));
        assert!(matches!(
            ledger.edit_budget("Food", None, Some("Fun")),
            Err(BuddyError::Duplicate(_))
        ));
        assert!(matches!(
            ledger.edit_budget(OVERALL, None, Some("Monthly")),
            Err(BuddyError::InvalidInput(_))
        ));
        assert!(matches!(
            ledger.edit_budget("Food", None, Some(OVERALL)),
            Err(BuddyError::InvalidInput(_))
        ));
        assert_eq!(ledger.budget("Food").unwrap().limit(), dollars(10000));
    }

    #[test]
    fn test_edit_overall_limit() {
        let mut ledger = BudgetLedger::new();
        let edited = ledger
            .edit_budget(OVERALL, Some(dollars(90000)), None)
            .unwrap();
        assert_eq!(edited.name, OVERALL);
        assert_eq!(ledger.budget(OVERALL).unwrap().limit(), dollars(90000));
    }

    #[test]
    fn test_find_expense_case_insensitive() {
        let mut ledger = BudgetLedger::new();
        ledger
            .add_expense("", dollars(450), "Coffee run", at(5, 9))
            .unwrap();
        ledger
            .add_expense("", dollars(300), "Tea", at(5, 10))
            .unwrap();

        let matches = ledger.find_expense("coffee").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].index, 1);
        assert_eq!(matches[0].expense.description(), "Coffee run");

        assert!(ledger.find_expense("juice").unwrap().is_empty());
    }

    #[test]
    fn test_find_expense_blank_keyword() {
        let ledger = BudgetLedger::new();
        assert!(matches!(
            ledger.find_expense("  "),
            Err(BuddyError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_list_all_expenses() {
        let mut ledger = BudgetLedger::new();
        ledger
            .add_expense("", dollars(100), "Old", at(1, 8))
            .unwrap();
        ledger
            .add_expense("", dollars(200), "New", at(9, 8))
            .unwrap();

        let all = ledger.list_all_expenses(&DateRange::all()).unwrap();
        assert_eq!(all[0].expense.description(), "New");
        assert_eq!(all[1].expense.description(), "Old");

        let early = ledger
            .list_all_expenses(&DateRange::new(None, Some(at(5, 0))))
            .unwrap();
        assert_eq!(early.len(), 1);
        assert_eq!(early[0].index, 2);
    }

    #[test]
    fn test_summary_puts_overall_first() {
        let mut ledger = BudgetLedger::new();
        ledger.set_budget("Zoo", dollars(100)).unwrap();
        ledger.set_budget("Art", dollars(100)).unwrap();

        let names: Vec<String> = ledger.summary().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec![OVERALL, "Art", "Zoo"]);
    }

    #[test]
    fn test_alert_fires_on_every_qualifying_add() {
        let mut ledger = BudgetLedger::new();
        assert_eq!(
            ledger.set_alert(dollars(2000)).unwrap(),
            AlertChange::Set(dollars(2000))
        );

        let first = ledger
            .add_expense("", dollars(1500), "Lunch", at(5, 12))
            .unwrap();
        assert_eq!(first.alert, None);

        let second = ledger
            .add_expense("", dollars(1000), "Dinner", at(5, 19))
            .unwrap();
        let notice = second.alert.unwrap();
        assert_eq!(notice.threshold, dollars(2000));
        assert_eq!(notice.total, dollars(2500));

        let third = ledger
            .add_expense("", dollars(100), "Gum", at(5, 20))
            .unwrap();
        assert!(third.alert.is_some());
    }

    #[test]
    fn test_remove_alert() {
        let mut ledger = BudgetLedger::with_alert(dollars(100)).unwrap();
        assert!(ledger.alert().is_enabled());
        assert_eq!(ledger.remove_alert().unwrap(), AlertChange::Removed);

        let added = ledger
            .add_expense("", dollars(5000), "Shoes", at(5, 12))
            .unwrap();
        assert_eq!(added.alert, None);
    }

    #[test]
    fn test_every_category_expense_is_in_overall() {
        let mut ledger = BudgetLedger::new();
        ledger.set_budget("Food", dollars(10000)).unwrap();
        ledger.set_budget("Fun", dollars(10000)).unwrap();
        for (i, category) in ["Food", "Fun", "", "Nope", "Food"].iter().enumerate() {
            ledger
                .add_expense(category, dollars(100 + i as i64), "Item", at(5, i as u32))
                .unwrap();
        }
        ledger.delete_expense(2).unwrap();

        let overall = ledger.budget(OVERALL).unwrap();
        for budget in ledger.budgets() {
            for expense in budget.expenses() {
                assert!(overall.expenses().contains(expense));
            }
        }
    }
}
