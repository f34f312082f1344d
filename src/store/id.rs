//! Sequential employee id generation.

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Format of generated employee ids: `{prefix}-{number}`, zero padded.
///
/// # Example
///
/// ```
/// use hr_dashboard::store::IdScheme;
///
/// let scheme = IdScheme::default();
/// let next = scheme.next_after(["EMP-001", "EMP-007", "TMP-900"]).unwrap();
/// assert_eq!(next, "EMP-008");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IdScheme {
    /// Text before the dash.
    pub prefix: String,
    /// Minimum number of digits.
    pub width: usize,
}

impl Default for IdScheme {
    fn default() -> Self {
        Self {
            prefix: "EMP".to_string(),
            width: 3,
        }
    }
}

impl IdScheme {
    /// Formats the id for sequence number `n`.
    pub fn format(&self, n: u64) -> String {
        format!("{}-{:0width$}", self.prefix, n, width = self.width)
    }

    /// Extracts the sequence number from an id using this scheme.
    pub fn sequence_of(&self, id: &str) -> Option<u64> {
        let digits = id.strip_prefix(&self.prefix)?.strip_prefix('-')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    /// Returns the id following the highest sequence number in `existing`.
    ///
    /// Ids that do not follow the scheme are ignored; with none present the
    /// sequence starts at 1.
    pub fn next_after<'a, I>(&self, existing: I) -> EngineResult<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let highest = existing
            .into_iter()
            .filter_map(|id| self.sequence_of(id))
            .max()
            .unwrap_or(0);

        let next = highest.checked_add(1).ok_or_else(|| EngineError::StorageError {
            message: format!("employee id sequence for '{}' is exhausted", self.prefix),
        })?;

        Ok(self.format(next))
    }
}
