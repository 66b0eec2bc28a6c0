use core::fmt;
use core::str::FromStr;

/// The scroll axis of a carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Items flow left to right; movement is applied on the X axis.
    Horizontal,
    /// Items flow top to bottom; movement is applied on the Y axis.
    Vertical,
}

impl Orientation {
    /// Picks the value that belongs to this axis.
    ///
    /// Every axis-dependent query in this crate goes through here, so providers never need to
    /// match on the orientation themselves.
    #[inline]
    pub fn select<T>(self, horizontal: T, vertical: T) -> T {
        match self {
            Self::Horizontal => horizontal,
            Self::Vertical => vertical,
        }
    }
}

impl FromStr for Orientation {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" | "x" | "horizontal" | "landscape" => Ok(Self::Horizontal),
            "Y" | "y" | "vertical" | "portrait" => Ok(Self::Vertical),
            _ => Err(ParseTokenError::new("orientation")),
        }
    }
}

/// Where the focused item sits after a column-span movement is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    /// The tail of the list is clamped against the trailing viewport edge; the view is fully
    /// scrolled and the focus moves through the static region.
    Leading,
    /// The view is pinned around the focused item.
    #[default]
    Centered,
    /// The focused item has not reached the anchor point yet; nothing scrolls.
    Trailing,
}

/// A pixel movement plus the clamp state that produced it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMovement {
    /// Signed translation along the scroll axis. Negative values move content toward the
    /// leading edge.
    pub distance: f64,
    pub position: Position,
}

impl ScrollMovement {
    /// The "no movement" result returned for incomplete inputs.
    pub const NEUTRAL: Self = Self {
        distance: 0.0,
        position: Position::Centered,
    };

    pub fn new(distance: f64, position: Position) -> Self {
        Self { distance, position }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

/// A directional input fed to the focus steppers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl FromStr for Direction {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            _ => Err(ParseTokenError::new("direction")),
        }
    }
}

/// A column descriptor: an item whose width is `span` grid units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    pub span: u32,
}

impl Column {
    pub const UNIT: Self = Self { span: 1 };

    pub fn new(span: u32) -> Self {
        Self { span }
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::UNIT
    }
}

impl From<u32> for Column {
    fn from(span: u32) -> Self {
        Self { span }
    }
}

/// Error returned when an orientation or direction token is not recognized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseTokenError {
    kind: &'static str,
}

impl ParseTokenError {
    fn new(kind: &'static str) -> Self {
        Self { kind }
    }

    /// What was being parsed (`"orientation"` or `"direction"`).
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized {} token", self.kind)
    }
}

impl core::error::Error for ParseTokenError {}
