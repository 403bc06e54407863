use crate::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of entity kinds the application persists.
///
/// Each kind gets its own logical table, its own seed dataset, and its own
/// health latch; kinds never share records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Exam,
    Todo,
    Schedule,
    Knowledge,
    ChatMessage,
    Profile,
}

impl EntityKind {
    /// Every kind, in a fixed order.
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Exam,
        EntityKind::Todo,
        EntityKind::Schedule,
        EntityKind::Knowledge,
        EntityKind::ChatMessage,
        EntityKind::Profile,
    ];

    /// Canonical snake_case name, as stored in the `kind` column.
    pub const fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Exam => "exam",
            EntityKind::Todo => "todo",
            EntityKind::Schedule => "schedule",
            EntityKind::Knowledge => "knowledge",
            EntityKind::ChatMessage => "chat_message",
            EntityKind::Profile => "profile",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exam" => Ok(EntityKind::Exam),
            "todo" => Ok(EntityKind::Todo),
            "schedule" => Ok(EntityKind::Schedule),
            "knowledge" => Ok(EntityKind::Knowledge),
            "chat_message" => Ok(EntityKind::ChatMessage),
            "profile" => Ok(EntityKind::Profile),
            other => Err(ModelError::UnknownKind(other.to_string())),
        }
    }
}
