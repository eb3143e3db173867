use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AnswerError, UserAnswers};
use super::items::IPIP_NEO_120;
use crate::mbti::items::MBTI_ITEMS;

/// Which instrument a session collects answers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentKind {
    BigFive,
    Mbti,
}

impl AssessmentKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::BigFive => "Big Five (IPIP-NEO-120)",
            Self::Mbti => "MBTI",
        }
    }

    pub fn item_ids(self) -> Vec<&'static str> {
        match self {
            Self::BigFive => IPIP_NEO_120.iter().map(|item| item.id).collect(),
            Self::Mbti => MBTI_ITEMS.iter().map(|item| item.id).collect(),
        }
    }

    pub fn knows_item(self, item_id: &str) -> bool {
        match self {
            Self::BigFive => IPIP_NEO_120.iter().any(|item| item.id == item_id),
            Self::Mbti => MBTI_ITEMS.iter().any(|item| item.id == item_id),
        }
    }

    pub fn item_count(self) -> usize {
        match self {
            Self::BigFive => IPIP_NEO_120.len(),
            Self::Mbti => MBTI_ITEMS.len(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("item '{item_id}' does not belong to the {kind} instrument")]
    UnknownItem { item_id: String, kind: &'static str },
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error("session was already completed")]
    AlreadyCompleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProgress {
    pub answered: usize,
    pub total: usize,
}

impl SessionProgress {
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.answered as f64 / self.total as f64) * 100.0)
            .round()
            .clamp(0.0, 100.0) as u8
    }
}

/// Answers collected for one instrument, passed by value between the
/// question flow and the scorers. Persisting it is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSession {
    pub kind: AssessmentKind,
    pub answers: UserAnswers,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl AssessmentSession {
    pub fn new(kind: AssessmentKind, started_at: DateTime<Utc>) -> Self {
        Self {
            kind,
            answers: UserAnswers::new(),
            started_at,
            completed_at: None,
        }
    }

    pub fn record(&mut self, item_id: &str, value: i64) -> Result<Option<u8>, SessionError> {
        if self.completed_at.is_some() {
            return Err(SessionError::AlreadyCompleted);
        }
        if !self.kind.knows_item(item_id) {
            return Err(SessionError::UnknownItem {
                item_id: item_id.to_string(),
                kind: self.kind.label(),
            });
        }

        Ok(self.answers.insert(item_id, value)?)
    }

    pub fn progress(&self) -> SessionProgress {
        let answered = self
            .kind
            .item_ids()
            .into_iter()
            .filter(|id| self.answers.contains(id))
            .count();

        SessionProgress {
            answered,
            total: self.kind.item_count(),
        }
    }

    /// Ids not yet answered, in instrument order. They score as neutral.
    pub fn unanswered(&self) -> Vec<&'static str> {
        self.kind
            .item_ids()
            .into_iter()
            .filter(|id| !self.answers.contains(id))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Close the session. Partially filled sessions may be completed too.
    pub fn complete(&mut self, at: DateTime<Utc>) -> Result<(), SessionError> {
        if self.completed_at.is_some() {
            return Err(SessionError::AlreadyCompleted);
        }
        self.completed_at = Some(at);
        Ok(())
    }
}
