use std::io::Read;

use serde::Deserialize;

use crate::error::Result;

/// Tool-use event delivered on stdin by the invoking host after a file
/// mutation. Unknown fields are ignored; missing fields default to empty so
/// a sparse event degrades to "nothing to scan" rather than an error.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct HookEvent {
    #[serde(default)]
    pub tool_name: String,

    #[serde(default)]
    pub tool_input: ToolInput,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ToolInput {
    #[serde(default)]
    pub file_path: String,
}

impl HookEvent {
    /// Parse an event from a JSON stream.
    ///
    /// # Errors
    /// Returns a `Json` error if the stream is not a valid event object.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Only file-mutating tools trigger a scan.
    #[must_use]
    pub fn is_file_mutation(&self) -> bool {
        matches!(self.tool_name.as_str(), "Edit" | "Write")
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
