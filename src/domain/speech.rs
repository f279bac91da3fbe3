//! Domain model for debate practice log entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::domain::common::Identifiable;

/// One submitted practice speech, stamped with the rule-check outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechEntry {
    pub id: Uuid,
    pub speaker: String,
    pub content: String,
    #[serde(default)]
    pub flagged: bool,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SpeechEntry {
    pub fn new(
        speaker: impl Into<String>,
        content: impl Into<String>,
        flagged: bool,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            speaker: speaker.into(),
            content: content.into(),
            flagged,
            timestamp,
            extra: Map::new(),
        }
    }

    /// Replaces the generated identifier; used by tests that need fixed ids.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn verdict_label(&self) -> &'static str {
        if self.flagged {
            "Flagged"
        } else {
            "Compliant"
        }
    }
}

impl Identifiable for SpeechEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}
