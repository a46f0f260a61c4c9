use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a single remote fetch (search results, upload history).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Ready,
    Empty,
    Error(String),
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadingState::Ready)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, LoadingState::Empty)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadingState::Error(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadingState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Whether the fetch has finished, successfully or not.
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            LoadingState::Ready | LoadingState::Empty | LoadingState::Error(_)
        )
    }

    pub fn can_retry(&self) -> bool {
        matches!(self, LoadingState::Error(_))
    }
}

impl fmt::Display for LoadingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadingState::Idle => write!(f, "Idle"),
            LoadingState::Loading => write!(f, "Loading"),
            LoadingState::Ready => write!(f, "Ready"),
            LoadingState::Empty => write!(f, "Empty"),
            LoadingState::Error(msg) => write!(f, "Error: {}", msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadingEvent {
    StartLoading,
    /// Fetch finished with `count` items.
    LoadComplete(usize),
    LoadError(String),
    RetryRequested,
}

impl LoadingEvent {
    pub fn apply_to_state(self, current_state: LoadingState) -> LoadingState {
        match (self, current_state) {
            (LoadingEvent::StartLoading, _) => LoadingState::Loading,
            (LoadingEvent::LoadComplete(0), _) => LoadingState::Empty,
            (LoadingEvent::LoadComplete(_), _) => LoadingState::Ready,
            (LoadingEvent::LoadError(msg), _) => LoadingState::Error(msg),
            (LoadingEvent::RetryRequested, LoadingState::Error(_)) => LoadingState::Loading,
            (LoadingEvent::RetryRequested, state) => state, // Nothing to retry
        }
    }
}
