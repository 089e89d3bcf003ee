//! Travel direction type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when decoding an invalid direction flag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction flag: must be 0 (inbound) or 1 (outbound)")]
pub struct InvalidDirection;

/// A trip's travel direction along its route.
///
/// This is a closed, two-valued classification — the engine never produces
/// an "unknown" direction. It is independent of geographic compass
/// direction; "inbound" is whichever end of the route the operator treats
/// as the reference terminal.
///
/// The feed encodes directions as integers, `0` for inbound and `1` for
/// outbound, and that encoding is preserved across the serde boundary.
///
/// # Examples
///
/// ```
/// use trip_labeler::domain::Direction;
///
/// assert_eq!(Direction::Inbound.feed_flag(), 0);
/// assert_eq!(Direction::from_feed_flag(1), Some(Direction::Outbound));
/// assert_eq!(Direction::from_feed_flag(2), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Direction {
    /// Toward the route's reference terminal.
    Inbound,
    /// Away from the route's reference terminal.
    Outbound,
}

impl Direction {
    /// Returns the feed's integer encoding: 0 for inbound, 1 for outbound.
    pub fn feed_flag(self) -> u8 {
        match self {
            Direction::Inbound => 0,
            Direction::Outbound => 1,
        }
    }

    /// Decode the feed's integer encoding, if valid.
    pub fn from_feed_flag(flag: u8) -> Option<Self> {
        match flag {
            0 => Some(Direction::Inbound),
            1 => Some(Direction::Outbound),
            _ => None,
        }
    }

    /// Returns the opposite direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Inbound => Direction::Outbound,
            Direction::Outbound => Direction::Inbound,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = InvalidDirection;

    fn try_from(flag: u8) -> Result<Self, Self::Error> {
        Direction::from_feed_flag(flag).ok_or(InvalidDirection)
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction.feed_flag()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Inbound => f.write_str("inbound"),
            Direction::Outbound => f.write_str("outbound"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_flag_roundtrip() {
        assert_eq!(Direction::from_feed_flag(0), Some(Direction::Inbound));
        assert_eq!(Direction::from_feed_flag(1), Some(Direction::Outbound));
        assert_eq!(Direction::Inbound.feed_flag(), 0);
        assert_eq!(Direction::Outbound.feed_flag(), 1);
    }

    #[test]
    fn reject_other_flags() {
        assert_eq!(Direction::from_feed_flag(2), None);
        assert_eq!(Direction::from_feed_flag(255), None);
    }

    #[test]
    fn opposite() {
        assert_eq!(Direction::Inbound.opposite(), Direction::Outbound);
        assert_eq!(Direction::Outbound.opposite(), Direction::Inbound);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Direction::Inbound), "inbound");
        assert_eq!(format!("{}", Direction::Outbound), "outbound");
    }

    #[test]
    fn serde_as_integer() {
        assert_eq!(serde_json::to_string(&Direction::Inbound).unwrap(), "0");
        assert_eq!(serde_json::to_string(&Direction::Outbound).unwrap(), "1");

        let back: Direction = serde_json::from_str("1").unwrap();
        assert_eq!(back, Direction::Outbound);

        assert!(serde_json::from_str::<Direction>("2").is_err());
    }
}
