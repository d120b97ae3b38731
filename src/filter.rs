//! Tag filtering
//!
//! Second stage of the gate, consulted only once a call has cleared the
//! severity threshold.

use crate::error::GateError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Set of tags accepted by [`Filter::AllowTags`]
pub type TagSet = HashSet<String>;

/// Which calls pass the filter stage
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    /// Every call passes
    #[default]
    AllowAll,
    /// Every call is suppressed, whatever its severity
    AllowNone,
    /// Tagged calls pass if they share a tag with the set; untagged calls always pass
    AllowTags(TagSet),
}

/// Filter discriminant without the tag payload (config and CLI surface)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FilterMode {
    #[default]
    All,
    None,
    Tags,
}

impl Filter {
    /// Build an `AllowTags` filter from anything yielding tag names
    pub fn tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Filter::AllowTags(tags.into_iter().map(Into::into).collect())
    }

    /// Build a filter from its mode and a tag list (tags ignored unless mode is `Tags`)
    pub fn from_mode<I, S>(mode: FilterMode, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match mode {
            FilterMode::All => Filter::AllowAll,
            FilterMode::None => Filter::AllowNone,
            FilterMode::Tags => Filter::tags(tags),
        }
    }

    pub fn mode(&self) -> FilterMode {
        match self {
            Filter::AllowAll => FilterMode::All,
            Filter::AllowNone => FilterMode::None,
            Filter::AllowTags(_) => FilterMode::Tags,
        }
    }

    /// Check whether a call carrying `tags` passes this filter
    ///
    /// `None` means the call site supplied no tags. `Some(&[])` is a present
    /// but empty set and never intersects anything.
    pub fn admits(&self, tags: Option<&[&str]>) -> bool {
        match self {
            Filter::AllowNone => false,
            Filter::AllowAll => true,
            Filter::AllowTags(valid) => match tags {
                None => true,
                Some(tags) => tags.iter().any(|tag| valid.contains(*tag)),
            },
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FilterMode::All => "all",
            FilterMode::None => "none",
            FilterMode::Tags => "tags",
        })
    }
}

impl FromStr for FilterMode {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "none" => Ok(FilterMode::None),
            "tags" => Ok(FilterMode::Tags),
            _ => Err(GateError::UnknownFilter {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for FilterMode {
    type Error = GateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FilterMode> for String {
    fn from(mode: FilterMode) -> Self {
        mode.to_string()
    }
}
