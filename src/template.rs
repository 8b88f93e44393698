use std::str::FromStr;

use crate::error::CovergenError;

/// Entries past this count are silently dropped by the list template.
pub const MAX_LIST_ITEMS: usize = 6;

/// Probe order is load-bearing for input compatibility: the first separator
/// present in the string wins, regardless of position.
const ITEM_SEPARATORS: &[&str] = &["|", "\n", "，", ","];

/// The closed set of visual layouts. String names cross into this enum at
/// exactly one boundary ([`FromStr`]); everything past it is total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Template {
    Gradient,
    Minimal,
    List,
    Bold,
}

impl Template {
    pub const ALL: &'static [Self] = &[Self::Gradient, Self::Minimal, Self::List, Self::Bold];

    pub fn name(self) -> &'static str {
        match self {
            Self::Gradient => "gradient",
            Self::Minimal => "minimal",
            Self::List => "list",
            Self::Bold => "bold",
        }
    }
}

impl FromStr for Template {
    type Err = CovergenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter().copied().find(|t| t.name() == s).ok_or_else(|| {
            let choices: Vec<_> = Self::ALL.iter().map(|t| t.name()).collect();
            CovergenError::validation(format!(
                "unknown template '{s}', choose from: {}",
                choices.join(", ")
            ))
        })
    }
}

/// Split free text into list items on the first matching separator; with no
/// separator present the whole string is a single item.
pub fn extract_list_items(text: &str) -> Vec<String> {
    for sep in ITEM_SEPARATORS {
        if text.contains(sep) {
            return text
                .split(sep)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
    }
    vec![text.to_string()]
}
