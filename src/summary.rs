//! Pure derived-view computations. Everything here is recomputed from the
//! full record collection on each call; no state is cached anywhere.

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::domain::{Expense, Settings};
use crate::week::WeekWindow;

/// Aggregated spend for a single category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Derived view model for the week containing `today`.
#[derive(Debug, Clone)]
pub struct WeekSummary {
    pub window: WeekWindow,
    pub spent: f64,
    pub remaining: f64,
    pub goal_percent: f64,
    pub top_category: Option<CategoryTotal>,
    pub average_daily: f64,
    pub days_tracked: usize,
}

/// Computes the full weekly summary from settings and the expense collection.
pub fn summarize(settings: &Settings, expenses: &[Expense], today: NaiveDate) -> WeekSummary {
    let window = WeekWindow::containing(today, settings.week_start);
    let spent = weekly_spend(expenses, &window);
    let days_tracked = days_with_spend(expenses, &window);
    WeekSummary {
        window,
        spent,
        remaining: remaining_budget(settings.weekly_budget, spent),
        goal_percent: goal_progress_percent(settings.savings_saved, settings.savings_goal),
        top_category: top_category(expenses, &window),
        average_daily: average_daily_spend(spent, days_tracked),
        days_tracked,
    }
}

/// Sum of amounts dated inside the window, inclusive on both ends.
pub fn weekly_spend(expenses: &[Expense], window: &WeekWindow) -> f64 {
    expenses
        .iter()
        .filter(|e| window.contains(e.date))
        .map(|e| e.amount)
        .sum()
}

/// Budget left for the week; overspend floors at zero rather than going
/// negative.
pub fn remaining_budget(budget: f64, spent: f64) -> f64 {
    (budget - spent).max(0.0)
}

/// Savings progress in percent, clamped to [0, 100]. A zero goal reads as 0%.
pub fn goal_progress_percent(saved: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    (saved / goal * 100.0).clamp(0.0, 100.0)
}

/// Category with the highest summed amount inside the window. Ties resolve
/// to whichever category first reached the maximum in insertion order.
pub fn top_category(expenses: &[Expense], window: &WeekWindow) -> Option<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for expense in expenses.iter().filter(|e| window.contains(e.date)) {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(entry) => entry.total += expense.amount,
            None => totals.push(CategoryTotal {
                category: expense.category.clone(),
                total: expense.amount,
            }),
        }
    }
    let mut best: Option<CategoryTotal> = None;
    for entry in totals {
        match &best {
            Some(current) if entry.total <= current.total => {}
            _ => best = Some(entry),
        }
    }
    best
}

/// Count of distinct calendar days inside the window with at least one
/// expense.
pub fn days_with_spend(expenses: &[Expense], window: &WeekWindow) -> usize {
    expenses
        .iter()
        .filter(|e| window.contains(e.date))
        .map(|e| e.date)
        .collect::<HashSet<_>>()
        .len()
}

/// Weekly spend divided by the number of days that carry spend; zero when the
/// week is empty.
pub fn average_daily_spend(spent: f64, days_tracked: usize) -> f64 {
    if days_tracked == 0 {
        0.0
    } else {
        spent / days_tracked as f64
    }
}

/// Expenses sorted by date descending for the history view. Same-day entries
/// keep their insertion order.
pub fn history(expenses: &[Expense]) -> Vec<&Expense> {
    let mut sorted: Vec<&Expense> = expenses.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}
