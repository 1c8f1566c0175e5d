use std::fmt;

use crate::error::Error;

/// Accepted spellings of the option column in `responses`, in preference order.
pub const OPTION_COLUMN_CANDIDATES: [&str; 3] = ["selected_option_id", "answered_option_id", "option_id"];

/// Name of the column that stores the chosen option of a response. Deployments
/// disagree on it, so it is resolved once at startup and injected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionColumn(String);

impl OptionColumn {
    pub fn new(name: &str) -> Result<Self, Error> {
        let mut chars = name.chars();
        let valid = match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
            _ => false,
        };
        if !valid || name.len() > 63 {
            return Err(Error::InvalidColumn(name.to_owned()));
        }
        Ok(OptionColumn(name.to_owned()))
    }

    /// Picks the first candidate present in `columns`, ignoring case and
    /// keeping the schema's spelling. Falls back to `selected_option_id`; if
    /// that column does not exist the insert reports it.
    pub fn resolve(columns: &[String]) -> Self {
        OPTION_COLUMN_CANDIDATES
            .iter()
            .find_map(|candidate| columns.iter().find(|c| c.eq_ignore_ascii_case(candidate)))
            .map(|c| OptionColumn(c.clone()))
            .unwrap_or_else(|| OptionColumn(OPTION_COLUMN_CANDIDATES[0].to_owned()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Quoted identifier, safe to splice into a statement.
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl fmt::Display for OptionColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
