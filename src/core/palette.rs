use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed enumerated paint palette shared with the canvas service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    White,
    Black,
    Gray,
    Orange,
    Purple,
    Pink,
    Brown,
    Teal,
}

impl ColorName {
    pub const ALL: [Self; 14] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Cyan,
        Self::Magenta,
        Self::White,
        Self::Black,
        Self::Gray,
        Self::Orange,
        Self::Purple,
        Self::Pink,
        Self::Brown,
        Self::Teal,
    ];

    /// Wire name used by the service and by serde.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
            Self::White => "white",
            Self::Black => "black",
            Self::Gray => "gray",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Brown => "brown",
            Self::Teal => "teal",
        }
    }

    /// `#RRGGBB` value hosts can hand straight to their renderer.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Red => "#FF0000",
            Self::Green => "#00FF00",
            Self::Blue => "#0000FF",
            Self::Yellow => "#FFFF00",
            Self::Cyan => "#00FFFF",
            Self::Magenta => "#FF00FF",
            Self::White => "#FFFFFF",
            Self::Black => "#000000",
            Self::Gray => "#808080",
            Self::Orange => "#FFA500",
            Self::Purple => "#800080",
            Self::Pink => "#FFC0CB",
            Self::Brown => "#A52A2A",
            Self::Teal => "#008080",
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
