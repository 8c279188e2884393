//! Service layer for Budget Buddy
//!
//! The service layer holds the business logic: the budget ledger with its
//! dual bookkeeping between the Overall budget and category budgets.

pub mod ledger;

pub use ledger::{
    BudgetCheck, BudgetEdited, BudgetLedger, BudgetSet, BudgetStatus, ExpenseAdded,
    ExpenseDeleted, ExpenseEdited, ExpenseMatch, OVERALL,
};
