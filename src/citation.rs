// citation.rs - Citation command wrapping (prefix / delimiter / suffix)

use serde::{Deserialize, Serialize};
use std::fmt;

const KEY1: &str = "key1";
const KEY2: &str = "key2";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CitationParseError {
    #[error("citation template '{0}' is missing the '{1}' placeholder")]
    MissingPlaceholder(String, &'static str),
    #[error("citation template '{0}' has 'key2' before 'key1'")]
    PlaceholdersOutOfOrder(String),
}

/// The wrapping applied around one or more citation keys, e.g. `\cite{` `,` `}`.
///
/// Stored by the preference file as a template string such as
/// `\cite{key1,key2}`; see [`CitationCommandString::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CitationCommandString {
    prefix: String,
    delimiter: String,
    suffix: String,
}

impl CitationCommandString {
    pub fn new(
        prefix: impl Into<String>,
        delimiter: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            delimiter: delimiter.into(),
            suffix: suffix.into(),
        }
    }

    /// Parse a template containing the `key1` and `key2` placeholders.
    ///
    /// Everything before `key1` is the prefix, everything between the two
    /// placeholders is the delimiter and everything after `key2` the suffix.
    pub fn parse(template: &str) -> Result<Self, CitationParseError> {
        let key1 = template
            .find(KEY1)
            .ok_or_else(|| CitationParseError::MissingPlaceholder(template.to_string(), KEY1))?;
        let after_key1 = key1 + KEY1.len();
        let key2 = match template[after_key1..].find(KEY2) {
            Some(offset) => after_key1 + offset,
            None if template.contains(KEY2) => {
                return Err(CitationParseError::PlaceholdersOutOfOrder(
                    template.to_string(),
                ));
            }
            None => {
                return Err(CitationParseError::MissingPlaceholder(
                    template.to_string(),
                    KEY2,
                ));
            }
        };

        Ok(Self::new(
            &template[..key1],
            &template[after_key1..key2],
            &template[key2 + KEY2.len()..],
        ))
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Wrap `keys` into the final citation string.
    pub fn format<S: AsRef<str>>(&self, keys: &[S]) -> String {
        format(keys, self)
    }
}

impl Default for CitationCommandString {
    fn default() -> Self {
        Self::new("\\cite{", ",", "}")
    }
}

impl fmt::Display for CitationCommandString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.prefix, KEY1, self.delimiter, KEY2, self.suffix
        )
    }
}

impl TryFrom<String> for CitationCommandString {
    type Error = CitationParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CitationCommandString> for String {
    fn from(value: CitationCommandString) -> Self {
        value.to_string()
    }
}

/// `prefix + keys.join(delimiter) + suffix`. No escaping happens here.
///
/// An empty key list yields `prefix + suffix`.
pub fn format<S: AsRef<str>>(keys: &[S], cmd: &CitationCommandString) -> String {
    let keys_len: usize = keys.iter().map(|k| k.as_ref().len() + 1).sum();
    let mut out = String::with_capacity(cmd.prefix.len() + cmd.suffix.len() + keys_len);
    out.push_str(&cmd.prefix);
    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            out.push_str(&cmd.delimiter);
        }
        out.push_str(key.as_ref());
    }
    out.push_str(&cmd.suffix);
    out
}
