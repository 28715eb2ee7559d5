use crate::models::{Record, SelectedFile};

/// Everything the view shows. Each field is replaced wholesale, never patched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub file: Option<SelectedFile>,
    /// Pretty-printed body of the last upload response; empty until one arrives.
    pub last_response: String,
    /// Result of the last successful list fetch.
    pub records: Vec<Record>,
}
