//! Domain models for the budget tracker and debate console.

pub mod common;
pub mod expense;
pub mod settings;
pub mod speech;

pub use common::Identifiable;
pub use expense::{Expense, ExpenseFields};
pub use settings::{Settings, Theme};
pub use speech::SpeechEntry;
