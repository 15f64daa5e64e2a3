//! Sample Group Loading
//!
//! Parses the FASTA-style group format: a `>name` line introduces a group,
//! and each following non-blank line holds whitespace-separated
//! observations appended to it. All load-time validation lives here so
//! the drivers only ever see well-formed groups.
//!
//! ```text
//! >placebo_vals
//! 54 51 58 44 55 52 42 47 58 46
//! >drug_vals
//! 54 73 53 70 73 68 52 65 65
//! ```

use std::path::Path;
use thiserror::Error;

/// A named, immutable sequence of observations.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGroup {
    /// Group name from the `>` header line.
    pub name: String,
    /// Observations, in file order.
    pub values: Vec<f64>,
}

/// Errors from loading or parsing sample groups.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to open.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A token could not be parsed as a floating-point number.
    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber {
        /// One-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// An observation parsed as NaN or infinity.
    #[error("line {line}: non-finite value {value} in group {group:?}")]
    NonFinite {
        /// One-based line number.
        line: usize,
        /// Name of the group being filled.
        group: String,
        /// The offending value.
        value: f64,
    },

    /// A value line appeared before the first `>` header.
    #[error("line {line}: values appear before any group header")]
    ValueBeforeHeader {
        /// One-based line number.
        line: usize,
    },

    /// A group header was not followed by any values.
    #[error("group {name:?} has no values")]
    EmptyGroup {
        /// Name of the empty group.
        name: String,
    },

    /// The input held fewer than two groups.
    #[error("need at least 2 sample groups, found {found}")]
    TooFewGroups {
        /// Number of groups found.
        found: usize,
    },
}

/// Load and validate sample groups from a file.
pub fn load_groups(path: &Path) -> Result<Vec<SampleGroup>, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_groups(&text)
}

/// Parse and validate sample groups from text.
pub fn parse_groups(text: &str) -> Result<Vec<SampleGroup>, InputError> {
    let mut groups: Vec<SampleGroup> = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        if let Some(name) = raw.strip_prefix('>') {
            groups.push(SampleGroup {
                name: name.trim().to_string(),
                values: Vec::new(),
            });
        } else if !raw.trim().is_empty() {
            let group = groups
                .last_mut()
                .ok_or(InputError::ValueBeforeHeader { line })?;
            for token in raw.split_whitespace() {
                let value: f64 = token.parse().map_err(|_| InputError::InvalidNumber {
                    line,
                    token: token.to_string(),
                })?;
                if !value.is_finite() {
                    return Err(InputError::NonFinite {
                        line,
                        group: group.name.clone(),
                        value,
                    });
                }
                group.values.push(value);
            }
        }
    }

    if let Some(empty) = groups.iter().find(|g| g.values.is_empty()) {
        return Err(InputError::EmptyGroup {
            name: empty.name.clone(),
        });
    }
    if groups.len() < 2 {
        return Err(InputError::TooFewGroups {
            found: groups.len(),
        });
    }

    Ok(groups)
}
