#![forbid(unsafe_code)]

//! Semantic toast categories.
//!
//! A [`Kind`] selects the visual treatment of a toast (its `toast-<kind>`
//! class) and the default glyph shown next to the message. Resolution from
//! user input is permissive: the six known kinds match exactly, `warn` and
//! `error` map to their canonical names, the empty string renders as the
//! `default` suffix, and anything else passes through unchanged so custom
//! stylesheet kinds keep working.

/// Semantic category of a toast.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Kind {
    Primary,
    Secondary,
    #[default]
    Info,
    Success,
    Warning,
    Danger,
    /// Empty input; renders as the `default` CSS suffix.
    Neutral,
    /// Unrecognized input, passed through as a literal CSS suffix.
    Other(String),
}

impl Kind {
    /// Resolves user input to a kind.
    ///
    /// Known kinds match themselves, empty input resolves to
    /// [`Kind::Neutral`], the synonyms `warn` and `error` map to
    /// [`Kind::Warning`] and [`Kind::Danger`], and any other value is kept
    /// verbatim in [`Kind::Other`].
    pub fn resolve(input: &str) -> Self {
        match input {
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            "info" => Self::Info,
            "success" => Self::Success,
            "warning" => Self::Warning,
            "danger" => Self::Danger,
            "" => Self::Neutral,
            "warn" => Self::Warning,
            "error" => Self::Danger,
            other => Self::Other(other.to_string()),
        }
    }

    /// The CSS suffix for this kind (`toast-<suffix>`).
    pub fn as_css(&self) -> &str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Neutral => "default",
            Self::Other(raw) => raw,
        }
    }

    /// Default glyph identifier for this kind, if it has one.
    pub fn default_glyph(&self) -> Option<&'static str> {
        match self {
            Self::Warning => Some("exclamation-sign"),
            Self::Success => Some("ok-sign"),
            Self::Danger => Some("remove-sign"),
            Self::Info => Some("info-sign"),
            _ => None,
        }
    }
}

impl From<&str> for Kind {
    fn from(input: &str) -> Self {
        Self::resolve(input)
    }
}

impl From<String> for Kind {
    fn from(input: String) -> Self {
        Self::resolve(&input)
    }
}

impl From<Kind> for String {
    fn from(kind: Kind) -> Self {
        kind.as_css().to_string()
    }
}
