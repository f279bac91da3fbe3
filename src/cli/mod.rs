//! Thin command-line surface: parses one command, runs it against the
//! controllers, and paints the recomputed view. All derived values come from
//! the pure summary functions; nothing here holds state of its own.

pub mod output;

use std::path::PathBuf;

use chrono::NaiveDate;
use dialoguer::Confirm;
use uuid::Uuid;

use crate::config::{Config, ConfigManager};
use crate::debate::{DebateConsole, MAX_STRIKES};
use crate::domain::{Expense, ExpenseFields, Theme};
use crate::errors::StoreError;
use crate::format;
use crate::state::BudgetTracker;
use crate::storage::{JsonFileStore, StateStore};
use crate::summary;
use crate::time::{Clock, SystemClock};
use crate::week::short_date;

/// Environment override for the state directory; used by tests and scripts.
pub const DATA_DIR_ENV: &str = "GLASSBUDGET_DATA_DIR";

pub fn run_cli() -> Result<(), StoreError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    run_with_args(&args)
}

pub fn run_with_args(args: &[String]) -> Result<(), StoreError> {
    let config = resolve_config()?;
    let store = StateStore::new(Box::new(JsonFileStore::new(config.resolve_data_root())?));
    let clock = SystemClock;

    let command = args.first().map(String::as_str).unwrap_or("summary");
    let rest: &[String] = if args.is_empty() { &[] } else { &args[1..] };
    match command {
        "summary" => cmd_summary(BudgetTracker::open(store), &clock),
        "list" => cmd_list(BudgetTracker::open(store)),
        "add" => cmd_add(BudgetTracker::open(store), rest, &clock),
        "edit" => cmd_edit(BudgetTracker::open(store), rest, &clock),
        "delete" => cmd_delete(BudgetTracker::open(store), rest),
        "budget" => cmd_budget(BudgetTracker::open(store), rest),
        "goal" => cmd_goal(BudgetTracker::open(store), rest),
        "week-start" => cmd_week_start(BudgetTracker::open(store), rest),
        "theme" => cmd_theme(BudgetTracker::open(store), rest),
        "practice" => cmd_practice(DebateConsole::open(store), rest, &clock),
        "speeches" => cmd_speeches(DebateConsole::open(store)),
        "help" | "--help" | "-h" => print_help(),
        other => {
            output::error(format!("Unknown command `{other}`"));
            print_help();
        }
    }
    Ok(())
}

fn resolve_config() -> Result<Config, StoreError> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(Config {
            data_root: Some(PathBuf::from(dir)),
            cache_root: None,
        });
    }
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    let manager = ConfigManager::with_base_dir(base.join("glassbudget"))?;
    Ok(manager.load().unwrap_or_else(|err| {
        tracing::warn!(%err, "discarding malformed config; using defaults");
        Config::default()
    }))
}

fn cmd_summary(tracker: BudgetTracker, clock: &dyn Clock) {
    let settings = tracker.settings();
    let summary = tracker.summary(clock.today());

    output::section(format!("Week of {}", summary.window.label()));
    output::info(format!(
        "Remaining: {} of {}",
        format::currency(summary.remaining),
        format::currency(settings.weekly_budget)
    ));
    output::info(format!("Spent this week: {}", format::currency(summary.spent)));
    match &summary.top_category {
        Some(top) => output::info(format!(
            "Top category: {} ({})",
            top.category,
            format::currency(top.total)
        )),
        None => output::info("Top category: —"),
    }
    output::info(format!(
        "Average daily: {}",
        format::currency(summary.average_daily)
    ));
    output::info(format!(
        "Savings: {} saved ({} of {})",
        format::percent(summary.goal_percent),
        format::currency(settings.savings_saved),
        format::currency(settings.savings_goal)
    ));
    output::info(format!(
        "Week starts on {} · theme {}",
        settings.week_start_label(),
        settings.theme
    ));
}

fn cmd_list(tracker: BudgetTracker) {
    let expenses = tracker.expenses();
    if expenses.is_empty() {
        output::info("No expenses yet. Add your first purchase.");
        return;
    }
    output::section(format!("{} items", expenses.len()));
    for expense in summary::history(expenses) {
        let note = if expense.note.is_empty() {
            "—"
        } else {
            expense.note.as_str()
        };
        output::info(format!(
            "{}  {}  {}  {}  ({})",
            expense.id,
            short_date(expense.date),
            format::currency(expense.amount),
            expense.category,
            note
        ));
    }
}

fn cmd_add(mut tracker: BudgetTracker, args: &[String], clock: &dyn Clock) {
    let Some(amount) = args.first().and_then(|raw| raw.parse::<f64>().ok()) else {
        output::warning("Usage: add <amount> <category> [note] [date]");
        return;
    };
    if amount == 0.0 {
        output::warning("Skipped: amount must be non-zero.");
        return;
    }
    let category = args.get(1).cloned().unwrap_or_else(|| "General".into());
    let note = args.get(2).cloned().unwrap_or_default();
    let date = parse_date(args.get(3)).unwrap_or_else(|| clock.today());

    let expense = Expense::new(amount, category, note.trim(), date);
    let label = format!(
        "Added {} to {} on {}",
        format::currency(expense.amount),
        expense.category,
        short_date(expense.date)
    );
    tracker.add_expense(expense);
    output::success(label);
}

fn cmd_edit(mut tracker: BudgetTracker, args: &[String], clock: &dyn Clock) {
    let Some(id) = args.first().and_then(|raw| raw.parse::<Uuid>().ok()) else {
        output::warning("Usage: edit <id> <amount> <category> [note] [date]");
        return;
    };
    if tracker.expense(id).is_none() {
        // Unknown ids are a no-op in the state layer; say so here instead of
        // silently succeeding at the prompt.
        output::warning(format!("No expense with id {id}"));
        return;
    }
    let amount = args
        .get(1)
        .and_then(|raw| raw.parse::<f64>().ok())
        .unwrap_or(0.0);
    let category = args.get(2).cloned().unwrap_or_else(|| "General".into());
    let note = args.get(3).cloned().unwrap_or_default();
    let date = parse_date(args.get(4)).unwrap_or_else(|| clock.today());

    tracker.update_expense(
        id,
        ExpenseFields {
            amount,
            category,
            note: note.trim().to_string(),
            date,
        },
    );
    output::success(format!("Updated expense {id}"));
}

fn cmd_delete(mut tracker: BudgetTracker, args: &[String]) {
    let Some(id) = args.first().and_then(|raw| raw.parse::<Uuid>().ok()) else {
        output::warning("Usage: delete <id> [--yes]");
        return;
    };
    let skip_confirm = args.iter().any(|arg| arg == "--yes");
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this expense?")
            .default(false)
            .interact()
            .unwrap_or(false);
        if !confirmed {
            output::info("Cancelled.");
            return;
        }
    }
    tracker.delete_expense(id);
    output::success(format!("Deleted expense {id}"));
}

fn cmd_budget(mut tracker: BudgetTracker, args: &[String]) {
    // Empty or non-numeric input coerces to zero, as the settings sheet did.
    let amount = args
        .first()
        .and_then(|raw| raw.parse::<f64>().ok())
        .unwrap_or(0.0);
    tracker.set_weekly_budget(amount);
    output::success(format!(
        "Weekly budget set to {}",
        format::currency(tracker.settings().weekly_budget)
    ));
}

fn cmd_goal(mut tracker: BudgetTracker, args: &[String]) {
    let goal = args
        .first()
        .and_then(|raw| raw.parse::<f64>().ok())
        .unwrap_or(0.0);
    let saved = args
        .get(1)
        .and_then(|raw| raw.parse::<f64>().ok())
        .unwrap_or(0.0);
    tracker.set_savings(goal, saved);
    output::success(format!(
        "Savings goal {} with {} saved",
        format::currency(tracker.settings().savings_goal),
        format::currency(tracker.settings().savings_saved)
    ));
}

fn cmd_week_start(mut tracker: BudgetTracker, args: &[String]) {
    let Some(weekday) = args.first().and_then(|raw| raw.parse::<u8>().ok()) else {
        output::warning("Usage: week-start <0-6> (0 = Sunday)");
        return;
    };
    tracker.set_week_start(weekday);
    output::success(format!(
        "Week starts on {}",
        tracker.settings().week_start_label()
    ));
}

fn cmd_theme(mut tracker: BudgetTracker, args: &[String]) {
    let theme = match args.first() {
        Some(raw) => {
            let theme = Theme::from_str(raw);
            tracker.set_theme(theme);
            theme
        }
        None => tracker.cycle_theme(),
    };
    output::success(format!("Theme set to {theme}"));
}

fn cmd_practice(mut console: DebateConsole, args: &[String], clock: &dyn Clock) {
    if args.len() < 2 {
        output::warning("Usage: practice <speaker> <speech text>");
        return;
    }
    let speaker = args[0].clone();
    let content = args[1..].join(" ");
    let entry = console.submit(speaker, content, clock);
    if entry.flagged {
        let strikes = console.strikes();
        output::warning(format!(
            "Personal pronouns are not permitted in formal debate. Strike {strikes} of {MAX_STRIKES}."
        ));
        if console.strikes_exhausted() {
            output::error("Strike limit reached.");
        }
    } else {
        output::success("Compliant delivery recorded.");
    }
}

fn cmd_speeches(console: DebateConsole) {
    let entries = console.entries();
    if entries.is_empty() {
        output::info("No practice speeches yet.");
        return;
    }
    output::section(format!(
        "{} speeches · {} of {} strikes",
        entries.len(),
        console.strikes(),
        MAX_STRIKES
    ));
    for entry in entries {
        output::info(format!(
            "[{}] {} — {}: {}",
            entry.verdict_label(),
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            entry.speaker,
            entry.content
        ));
    }
}

fn parse_date(raw: Option<&String>) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw?, "%Y-%m-%d").ok()
}

fn print_help() {
    output::section("glassbudget");
    output::info("summary                                Weekly budget summary (default)");
    output::info("list                                   Expense history, newest first");
    output::info("add <amount> <category> [note] [date]  Record an expense");
    output::info("edit <id> <amount> <category> [note] [date]");
    output::info("delete <id> [--yes]                    Remove an expense");
    output::info("budget <amount>                        Set the weekly budget");
    output::info("goal <goal> <saved>                    Set the savings goal");
    output::info("week-start <0-6>                       Set the week start day (0 = Sunday)");
    output::info("theme [auto|light|dark]                Set or cycle the theme");
    output::info("practice <speaker> <speech>            Submit a practice speech");
    output::info("speeches                               Show the practice log");
}
