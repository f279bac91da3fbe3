//! Domain model for user-entered expense records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::domain::common::Identifiable;

/// A single expense line: amount, category label, free-text note, and the
/// calendar day it applies to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub note: String,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Expense {
    pub fn new(
        amount: f64,
        category: impl Into<String>,
        note: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            category: category.into(),
            note: note.into(),
            date,
            extra: Map::new(),
        }
    }

    /// Replaces the generated identifier; used by tests that need fixed ids.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Applies a full-field edit, keeping the id and any unknown persisted
    /// fields intact.
    pub fn apply(&mut self, fields: ExpenseFields) {
        self.amount = fields.amount;
        self.category = fields.category;
        self.note = fields.note;
        self.date = fields.date;
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Editable fields of an expense; edits replace every field at once.
#[derive(Debug, Clone)]
pub struct ExpenseFields {
    pub amount: f64,
    pub category: String,
    pub note: String,
    pub date: NaiveDate,
}
