use crate::services::StoreError;
use std::fmt;
use std::str::FromStr;

/// A table identifier that is safe to splice into SQL.
///
/// Only `[A-Za-z_][A-Za-z0-9_]*` up to `MAX_LEN` characters is accepted, and
/// the name is always emitted double-quoted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(String);

impl TableName {
    pub const MAX_LEN: usize = 128;

    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        let mut chars = raw.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

        if !valid_start || !valid_rest || raw.len() > Self::MAX_LEN {
            return Err(StoreError::InvalidTableName(raw.to_string()));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name as a quoted SQL identifier.
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl FromStr for TableName {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
