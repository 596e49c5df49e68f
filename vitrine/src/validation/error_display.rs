use serde::{Deserialize, Serialize};

/// Where the inline error annotation for a field is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorDisplay {
    /// Immediately after the field, as its next sibling (default).
    #[default]
    AfterField,
    /// As the last child of the field's parent.
    EndOfParent,
}
