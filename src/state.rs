//! The view-state synchronizer: one controller owns the settings and expense
//! collection, applies mutations, and persists the full state after each one.
//! Derived values are never stored; callers recompute them via [`summary`].
//!
//! [`summary`]: crate::summary

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::common::position_of;
use crate::domain::{Expense, ExpenseFields, Settings, Theme};
use crate::storage::StateStore;
use crate::summary::{self, WeekSummary};

/// Owns the budget tracker state and keeps the persisted copy identical to
/// the in-memory one after every completed mutation.
pub struct BudgetTracker {
    settings: Settings,
    expenses: Vec<Expense>,
    store: StateStore,
}

impl BudgetTracker {
    /// Loads persisted state, falling back to defaults for anything missing
    /// or corrupt.
    pub fn open(store: StateStore) -> Self {
        let settings = store.load_settings();
        let expenses = store.load_expenses();
        Self {
            settings,
            expenses,
            store,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Recomputes the weekly summary for the week containing `today`.
    pub fn summary(&self, today: NaiveDate) -> WeekSummary {
        summary::summarize(&self.settings, &self.expenses, today)
    }

    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
        self.persist();
    }

    /// Full-field replace of the expense with the given id. Unknown ids are
    /// silently ignored.
    pub fn update_expense(&mut self, id: Uuid, fields: ExpenseFields) {
        if let Some(index) = position_of(&self.expenses, id) {
            self.expenses[index].apply(fields);
        }
        self.persist();
    }

    /// Removes the expense with the given id. Unknown ids are silently
    /// ignored.
    pub fn delete_expense(&mut self, id: Uuid) {
        if let Some(index) = position_of(&self.expenses, id) {
            self.expenses.remove(index);
        }
        self.persist();
    }

    /// Negative budget input coerces to zero.
    pub fn set_weekly_budget(&mut self, amount: f64) {
        self.settings.weekly_budget = amount.max(0.0);
        self.persist();
    }

    pub fn set_week_start(&mut self, weekday: u8) {
        self.settings.week_start = weekday % 7;
        self.persist();
    }

    pub fn set_savings(&mut self, goal: f64, saved: f64) {
        self.settings.savings_goal = goal.max(0.0);
        self.settings.savings_saved = saved.max(0.0);
        self.persist();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.settings.theme = theme;
        self.persist();
    }

    pub fn cycle_theme(&mut self) -> Theme {
        let next = self.settings.theme.next();
        self.set_theme(next);
        next
    }

    /// Writes both records back to the store. Persistence failures are logged
    /// and otherwise ignored; the in-memory state stays authoritative for the
    /// rest of the session.
    fn persist(&self) {
        if let Err(err) = self.store.save_settings(&self.settings) {
            tracing::warn!(%err, "failed to persist settings");
        }
        if let Err(err) = self.store.save_expenses(&self.expenses) {
            tracing::warn!(%err, "failed to persist expenses");
        }
    }
}
