#![forbid(unsafe_code)]

//! Toast configuration.
//!
//! [`ToastOptions`] is an explicit, immutable configuration value: no global
//! mutable defaults. `ToastOptions::default()` is the process-wide default
//! configuration; a [`crate::Toaster`] can carry its own defaults, and call
//! sites override individual fields either through the builder methods or
//! with struct-update syntax over `toaster.defaults().clone()`.
//!
//! The auto-hide timeout is a tagged value, [`Timeout`], built by a single
//! parsing function. `false`, `"false"`, and `0` disable auto-hide;
//! fractional seconds are kept at full precision; negative or non-finite
//! input is rejected with a [`ConfigError`] instead of being coerced.

use crate::error::ConfigError;
use crate::kind::Kind;
use crate::position::Position;
use std::time::Duration;

/// Auto-hide timeout for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Timeout {
    /// Never auto-hide; the toast stays until dismissed manually.
    Disabled,
    /// Auto-hide once the delay has elapsed.
    After(Duration),
}

impl Default for Timeout {
    fn default() -> Self {
        Self::After(Duration::from_secs(3))
    }
}

impl Timeout {
    /// Builds a timeout from a number of seconds (fractional allowed).
    ///
    /// Zero disables auto-hide; negative or non-finite input is rejected.
    pub fn from_secs(secs: f64) -> Result<Self, ConfigError> {
        if !secs.is_finite() || secs < 0.0 {
            return Err(ConfigError::TimeoutOutOfRange(secs));
        }
        if secs == 0.0 {
            return Ok(Self::Disabled);
        }
        Duration::try_from_secs_f64(secs)
            .map(Self::After)
            .map_err(|_| ConfigError::TimeoutOutOfRange(secs))
    }

    /// Parses a timeout token: `"false"` disables, anything else must be a
    /// number of seconds.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let token = input.trim();
        if token == "false" {
            return Ok(Self::Disabled);
        }
        match token.parse::<f64>() {
            Ok(secs) => Self::from_secs(secs),
            Err(_) => Err(ConfigError::InvalidTimeout(input.to_string())),
        }
    }

    /// The hide delay, if auto-hide is enabled.
    pub fn delay(&self) -> Option<Duration> {
        match self {
            Self::Disabled => None,
            Self::After(delay) => Some(*delay),
        }
    }

    /// Returns whether auto-hide is disabled.
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }
}

impl From<bool> for Timeout {
    /// `false` disables auto-hide; `true` restores the default delay.
    fn from(enabled: bool) -> Self {
        if enabled { Self::default() } else { Self::Disabled }
    }
}

impl From<Duration> for Timeout {
    fn from(delay: Duration) -> Self {
        if delay.is_zero() {
            Self::Disabled
        } else {
            Self::After(delay)
        }
    }
}

/// Placement of the countdown progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Progress {
    /// No indicator.
    #[default]
    Disabled,
    /// Bar docked to the top edge of the toast.
    Top,
    /// Bar docked to the bottom edge of the toast.
    Bottom,
    /// Full-toast background fill.
    Background,
}

impl Progress {
    /// Parses a placement token. `"false"` and the empty string disable the
    /// indicator; unrecognized placements render as `Background`.
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "false" | "" => Self::Disabled,
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            _ => Self::Background,
        }
    }

    /// The placement word used in the indicator's class.
    pub fn as_css(self) -> Option<&'static str> {
        match self {
            Self::Disabled => None,
            Self::Top => Some("top"),
            Self::Bottom => Some("bottom"),
            Self::Background => Some("background"),
        }
    }

    /// Returns whether the indicator is disabled.
    pub fn is_disabled(self) -> bool {
        matches!(self, Self::Disabled)
    }

    /// Whether the indicator is inserted before the toast content.
    /// Bottom bars append; top bars and background fills prepend.
    pub(crate) fn prepends(self) -> bool {
        matches!(self, Self::Top | Self::Background)
    }
}

/// Configuration for one toast.
///
/// All fields are public; the builder methods exist for call-site
/// convenience and each starts from [`ToastOptions::default`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ToastOptions {
    /// Optional header text, HTML-escaped before render.
    pub title: Option<String>,
    /// Body markup; wins over `text` and `message` when present.
    ///
    /// Inserted verbatim: callers are trusted with this markup, so it is an
    /// injection surface. Titles are always escaped; body content never is.
    pub content: Option<String>,
    /// Body markup; wins over `message` when present.
    pub text: Option<String>,
    /// Body markup fallback.
    pub message: String,
    /// Semantic category.
    pub kind: Kind,
    /// Container anchor position.
    pub position: Position,
    /// Glyph identifier; `None` falls back to the kind's default glyph.
    pub icon: Option<String>,
    /// Auto-hide timeout.
    pub timeout: Timeout,
    /// Countdown indicator placement.
    pub progress: Progress,
    /// Fade in/out duration.
    pub animation: Duration,
    /// Whether a close control is rendered.
    pub dismissible: bool,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            title: None,
            content: None,
            text: None,
            message: "Notification".to_string(),
            kind: Kind::default(),
            position: Position::default(),
            icon: None,
            timeout: Timeout::default(),
            progress: Progress::default(),
            animation: Duration::from_millis(300),
            dismissible: true,
        }
    }
}

impl ToastOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the body content markup.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the body text markup.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the fallback message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the kind; accepts a [`Kind`] or any string input for
    /// [`Kind::resolve`].
    pub fn kind(mut self, kind: impl Into<Kind>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets the position; accepts a [`Position`] or any string input for
    /// [`Position::resolve`].
    pub fn position(mut self, position: impl Into<Position>) -> Self {
        self.position = position.into();
        self
    }

    /// Sets an explicit glyph identifier.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the auto-hide timeout.
    pub fn timeout(mut self, timeout: impl Into<Timeout>) -> Self {
        self.timeout = timeout.into();
        self
    }

    /// Disables auto-hide.
    pub fn no_timeout(mut self) -> Self {
        self.timeout = Timeout::Disabled;
        self
    }

    /// Sets the progress indicator placement.
    pub fn progress(mut self, progress: Progress) -> Self {
        self.progress = progress;
        self
    }

    /// Sets the fade duration.
    pub fn animation(mut self, duration: Duration) -> Self {
        self.animation = duration;
        self
    }

    /// Sets whether the toast shows a close control.
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    /// Resolves the body markup: `content`, else `text`, else `message`.
    pub fn body(&self) -> &str {
        self.content
            .as_deref()
            .or(self.text.as_deref())
            .unwrap_or(&self.message)
    }

    /// Resolves the glyph: the explicit icon, else the kind's default.
    pub fn glyph(&self) -> Option<&str> {
        self.icon.as_deref().or_else(|| self.kind.default_glyph())
    }
}

/// Input accepted by the toast factory: a bare message or full options.
#[derive(Debug, Clone, PartialEq)]
pub enum ToastSpec {
    /// A bare string, treated as `{ message }` over the toaster defaults.
    Message(String),
    /// Full options, used as supplied.
    Options(ToastOptions),
}

impl From<&str> for ToastSpec {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<String> for ToastSpec {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<ToastOptions> for ToastSpec {
    fn from(options: ToastOptions) -> Self {
        Self::Options(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = ToastOptions::default();
        assert_eq!(opts.message, "Notification");
        assert_eq!(opts.kind, Kind::Info);
        assert_eq!(opts.position, Position::BottomCenter);
        assert_eq!(opts.timeout, Timeout::After(Duration::from_secs(3)));
        assert_eq!(opts.progress, Progress::Disabled);
        assert_eq!(opts.animation, Duration::from_millis(300));
        assert!(opts.dismissible);
        assert!(opts.title.is_none());
        assert!(opts.icon.is_none());
    }

    #[test]
    fn body_resolution_order() {
        let opts = ToastOptions::new()
            .message("message")
            .text("text")
            .content("content");
        assert_eq!(opts.body(), "content");

        let opts = ToastOptions::new().message("message").text("text");
        assert_eq!(opts.body(), "text");

        let opts = ToastOptions::new().message("message");
        assert_eq!(opts.body(), "message");
    }

    #[test]
    fn glyph_prefers_explicit_icon() {
        let opts = ToastOptions::new().kind(Kind::Danger).icon("bell");
        assert_eq!(opts.glyph(), Some("bell"));
        let opts = ToastOptions::new().kind(Kind::Danger);
        assert_eq!(opts.glyph(), Some("remove-sign"));
        let opts = ToastOptions::new().kind(Kind::Primary);
        assert_eq!(opts.glyph(), None);
    }

    #[test]
    fn builder_accepts_string_kind_and_position() {
        let opts = ToastOptions::new().kind("error").position("top");
        assert_eq!(opts.kind, Kind::Danger);
        assert_eq!(opts.position, Position::TopCenter);
    }

    #[test]
    fn timeout_from_secs() {
        assert_eq!(
            Timeout::from_secs(2.0),
            Ok(Timeout::After(Duration::from_secs(2)))
        );
        assert_eq!(
            Timeout::from_secs(0.5),
            Ok(Timeout::After(Duration::from_millis(500)))
        );
        assert_eq!(Timeout::from_secs(0.0), Ok(Timeout::Disabled));
        assert_eq!(
            Timeout::from_secs(-1.0),
            Err(ConfigError::TimeoutOutOfRange(-1.0))
        );
        assert!(Timeout::from_secs(f64::NAN).is_err());
        assert!(Timeout::from_secs(f64::INFINITY).is_err());
        // Finite but unrepresentable as a Duration.
        assert!(Timeout::from_secs(2.5e300).is_err());
    }

    #[test]
    fn timeout_parse() {
        assert_eq!(Timeout::parse("false"), Ok(Timeout::Disabled));
        assert_eq!(Timeout::parse("0"), Ok(Timeout::Disabled));
        assert_eq!(
            Timeout::parse("2.5"),
            Ok(Timeout::After(Duration::from_millis(2500)))
        );
        assert_eq!(
            Timeout::parse("soon"),
            Err(ConfigError::InvalidTimeout("soon".to_string()))
        );
    }

    #[test]
    fn timeout_from_bool_and_duration() {
        assert_eq!(Timeout::from(false), Timeout::Disabled);
        assert_eq!(Timeout::from(true), Timeout::default());
        assert_eq!(
            Timeout::from(Duration::from_secs(1)),
            Timeout::After(Duration::from_secs(1))
        );
        assert_eq!(Timeout::from(Duration::ZERO), Timeout::Disabled);
    }

    #[test]
    fn progress_parse() {
        assert_eq!(Progress::parse("false"), Progress::Disabled);
        assert_eq!(Progress::parse(""), Progress::Disabled);
        assert_eq!(Progress::parse("top"), Progress::Top);
        assert_eq!(Progress::parse("bottom"), Progress::Bottom);
        assert_eq!(Progress::parse("background"), Progress::Background);
        assert_eq!(Progress::parse("sideways"), Progress::Background);
    }

    #[test]
    fn progress_placement() {
        assert!(Progress::Top.prepends());
        assert!(Progress::Background.prepends());
        assert!(!Progress::Bottom.prepends());
        assert_eq!(Progress::Top.as_css(), Some("top"));
        assert_eq!(Progress::Disabled.as_css(), None);
    }

    #[test]
    fn spec_from_str_and_options() {
        let spec = ToastSpec::from("Saved");
        assert_eq!(spec, ToastSpec::Message("Saved".to_string()));
        let spec = ToastSpec::from(ToastOptions::new().message("hi"));
        assert!(matches!(spec, ToastSpec::Options(_)));
    }
}
