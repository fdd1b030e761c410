//! Robot heading and its presentation table.

use core::fmt;
use core::str::FromStr;

/// Facing direction of the robot. Turning right walks the variants in
/// declaration order and wraps.
///
/// On the wire a heading is its upper-case name. Decoding goes through
/// [`FromStr`], so any casing is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "std",
    serde(rename_all = "UPPERCASE", try_from = "std::string::String")
)]
pub enum Heading {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

/// Everything the view needs to know about one heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingInfo {
    /// Wire name used by the server.
    pub name: &'static str,
    pub glyph: char,
    pub label: &'static str,
}

static TABLE: [HeadingInfo; 4] = [
    HeadingInfo {
        name: "NORTH",
        glyph: '↑',
        label: "North ↑",
    },
    HeadingInfo {
        name: "EAST",
        glyph: '→',
        label: "East →",
    },
    HeadingInfo {
        name: "SOUTH",
        glyph: '↓',
        label: "South ↓",
    },
    HeadingInfo {
        name: "WEST",
        glyph: '←',
        label: "West ←",
    },
];

impl Heading {
    pub const ALL: [Heading; 4] = [
        Heading::North,
        Heading::East,
        Heading::South,
        Heading::West,
    ];

    pub fn info(self) -> &'static HeadingInfo {
        &TABLE[self as usize]
    }

    pub const fn turn_right(self) -> Heading {
        Self::ALL[(self as usize + 1) % 4]
    }

    pub fn glyph(self) -> char {
        self.info().glyph
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by [`Heading::from_str`] for anything that is not a cardinal name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownHeading;

impl fmt::Display for UnknownHeading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown heading")
    }
}

impl FromStr for Heading {
    type Err = UnknownHeading;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heading::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownHeading)
    }
}

#[cfg(feature = "std")]
impl TryFrom<std::string::String> for Heading {
    type Error = UnknownHeading;

    fn try_from(s: std::string::String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
