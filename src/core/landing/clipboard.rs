//! Copy-to-clipboard button states

/// How long the copy button shows its result before reverting (ms)
pub const COPY_FEEDBACK_MS: u32 = 2000;

/// State of a copy button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CopyState {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyState {
    /// State after a clipboard write settled
    pub fn from_result<E>(result: &Result<(), E>) -> Self {
        if result.is_ok() {
            CopyState::Copied
        } else {
            CopyState::Failed
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            CopyState::Idle => "Copy",
            CopyState::Copied => "Copied!",
            CopyState::Failed => "Failed",
        }
    }

    /// Class added to the button next to `copy-btn`
    pub fn class(&self) -> &'static str {
        match self {
            CopyState::Copied => "copied",
            CopyState::Idle | CopyState::Failed => "",
        }
    }

    /// Whether the state reverts to [`CopyState::Idle`] after [`COPY_FEEDBACK_MS`]
    pub fn is_transient(&self) -> bool {
        !matches!(self, CopyState::Idle)
    }
}
