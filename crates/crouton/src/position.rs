#![forbid(unsafe_code)]

//! Screen positions for toast containers.
//!
//! Six anchor positions, one container per position. Resolution accepts the
//! canonical kebab-case names, a set of aliases in either kebab-case or
//! camelCase spelling (`top`, `left-top`, `leftTop`, ...), and falls back to
//! `bottom-center` for anything unrecognized.

/// Vertical half of an anchor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    Top,
    Bottom,
}

impl Vertical {
    /// The position word used in container classes.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// Horizontal half of an anchor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizontal {
    Left,
    Center,
    Right,
}

impl Horizontal {
    /// The position word used in container classes.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Anchor position of a toast container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Position {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    #[default]
    BottomCenter,
    BottomRight,
}

impl Position {
    /// All positions, in reading order.
    pub const ALL: [Position; 6] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// Resolves user input to a position.
    ///
    /// Canonical names match exactly; aliases are looked up after
    /// normalizing kebab-case to camelCase (so `left-top` and `leftTop`
    /// both work); anything else falls back to `bottom-center`.
    pub fn resolve(input: &str) -> Self {
        match input {
            "top-left" => return Self::TopLeft,
            "top-center" => return Self::TopCenter,
            "top-right" => return Self::TopRight,
            "bottom-left" => return Self::BottomLeft,
            "bottom-center" => return Self::BottomCenter,
            "bottom-right" => return Self::BottomRight,
            _ => {}
        }
        match camel_case(input).as_str() {
            "top" => Self::TopCenter,
            "bottom" => Self::BottomCenter,
            "leftTop" => Self::TopLeft,
            "rightTop" => Self::TopRight,
            "leftBottom" => Self::BottomLeft,
            "rightBottom" => Self::BottomRight,
            _ => Self::BottomCenter,
        }
    }

    /// The canonical kebab-case name.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
        }
    }

    /// Vertical anchor: decides prepend-vs-append stacking.
    pub fn vertical(self) -> Vertical {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => Vertical::Top,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => Vertical::Bottom,
        }
    }

    /// Horizontal anchor.
    pub fn horizontal(self) -> Horizontal {
        match self {
            Self::TopLeft | Self::BottomLeft => Horizontal::Left,
            Self::TopCenter | Self::BottomCenter => Horizontal::Center,
            Self::TopRight | Self::BottomRight => Horizontal::Right,
        }
    }
}

impl From<&str> for Position {
    fn from(input: &str) -> Self {
        Self::resolve(input)
    }
}

impl From<String> for Position {
    fn from(input: String) -> Self {
        Self::resolve(&input)
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.as_css().to_string()
    }
}

/// Collapses `-`/`_` word separators into camelCase.
fn camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut upper_next = false;
    for ch in input.chars() {
        if ch == '-' || ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
