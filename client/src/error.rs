use thiserror::Error;

/// Operation a request was made for. Decides the user-facing failure text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiAction {
    FetchPrompts,
    FetchCategories,
    AddPrompt,
    UpdatePrompt,
    DeletePrompt,
    EnhancePrompt,
}

impl ApiAction {
    pub fn failure_message(&self) -> &'static str {
        match self {
            ApiAction::FetchPrompts => "Failed to fetch prompts",
            ApiAction::FetchCategories => "Failed to fetch categories",
            ApiAction::AddPrompt => "Failed to add prompt",
            ApiAction::UpdatePrompt => "Failed to update prompt",
            ApiAction::DeletePrompt => "Failed to delete prompt",
            ApiAction::EnhancePrompt => "Failed to enhance prompt",
        }
    }
}

/// Failure of a single API call.
///
/// Displays only the generic message for the action; the cause is kept for
/// logging.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{}", .action.failure_message())]
    Transport {
        action: ApiAction,
        #[source]
        source: reqwest::Error,
    },

    #[error("{}", .action.failure_message())]
    Rejected { action: ApiAction, status: u16 },
}

impl ClientError {
    pub fn action(&self) -> ApiAction {
        match self {
            ClientError::Transport { action, .. } | ClientError::Rejected { action, .. } => *action,
        }
    }

    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Rejected { status, .. } => Some(*status),
            ClientError::Transport { source, .. } => source.status().map(|status| status.as_u16()),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Failed to copy to clipboard: {0}")]
pub struct ClipboardError(pub String);
