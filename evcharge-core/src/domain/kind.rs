use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Station variant. Both variants behave identically; the kind only decides
/// which strategy the factory assigns by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationKind {
    Fast,
    Slow,
}

impl StationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "Fast",
            Self::Slow => "Slow",
        }
    }
}

impl fmt::Display for StationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized kind string. Carries the input as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl FromStr for StationKind {
    type Err = UnknownKind;

    /// Case-insensitive: "fast", "FAST" and "Fast" all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("fast") {
            Ok(Self::Fast)
        } else if s.eq_ignore_ascii_case("slow") {
            Ok(Self::Slow)
        } else {
            Err(UnknownKind(s.to_string()))
        }
    }
}
