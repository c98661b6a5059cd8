//! Premier League position classes.

use crate::error::FplError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four position classes a player can be listed under.
///
/// Upstream encodes these as `element_type` 1..=4. Any other value (for
/// example the assistant-manager element type) is not a playing position.
///
/// # Examples
///
/// ```rust
/// use fpl_league::Position;
///
/// assert_eq!(Position::try_from(3).unwrap(), Position::Midfielder);
/// assert_eq!(Position::Forward.to_string(), "FWD");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    /// All positions in pitch order, goalkeeper first.
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// Upstream `element_type` id.
    pub fn to_u8(&self) -> u8 {
        match self {
            Position::Goalkeeper => 1,
            Position::Defender => 2,
            Position::Midfielder => 3,
            Position::Forward => 4,
        }
    }

    /// Zero-based row index on the pitch (GK row 0 ... FWD row 3).
    pub fn index(&self) -> usize {
        usize::from(self.to_u8() - 1)
    }
}

impl TryFrom<u8> for Position {
    type Error = FplError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Position::Goalkeeper),
            2 => Ok(Position::Defender),
            3 => Ok(Position::Midfielder),
            4 => Ok(Position::Forward),
            _ => Err(FplError::InvalidPosition {
                position: id.to_string(),
            }),
        }
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> Self {
        position.to_u8()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::Goalkeeper => "GKP",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GK" | "GKP" | "GOALKEEPER" => Ok(Position::Goalkeeper),
            "DEF" | "DEFENDER" => Ok(Position::Defender),
            "MID" | "MIDFIELDER" => Ok(Position::Midfielder),
            "FWD" | "FW" | "FORWARD" => Ok(Position::Forward),
            other => Err(FplError::InvalidPosition {
                position: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_type_mappings() {
        assert_eq!(Position::try_from(1).unwrap(), Position::Goalkeeper);
        assert_eq!(Position::try_from(2).unwrap(), Position::Defender);
        assert_eq!(Position::try_from(3).unwrap(), Position::Midfielder);
        assert_eq!(Position::try_from(4).unwrap(), Position::Forward);

        // Assistant managers and garbage are not playing positions
        assert!(Position::try_from(0).is_err());
        assert!(Position::try_from(5).is_err());

        for position in Position::ALL {
            assert_eq!(Position::try_from(position.to_u8()).unwrap(), position);
        }
    }

    #[test]
    fn test_position_string_conversion() {
        assert_eq!(Position::Goalkeeper.to_string(), "GKP");
        assert_eq!(Position::Defender.to_string(), "DEF");
        assert_eq!(Position::Midfielder.to_string(), "MID");
        assert_eq!(Position::Forward.to_string(), "FWD");

        assert_eq!("gk".parse::<Position>().unwrap(), Position::Goalkeeper);
        assert_eq!("Forward".parse::<Position>().unwrap(), Position::Forward);
        assert!("QB".parse::<Position>().is_err());
    }

    #[test]
    fn test_position_serde_uses_element_type() {
        assert_eq!(serde_json::to_string(&Position::Midfielder).unwrap(), "3");
        let pos: Position = serde_json::from_str("2").unwrap();
        assert_eq!(pos, Position::Defender);
        assert!(serde_json::from_str::<Position>("9").is_err());
    }

    #[test]
    fn test_pitch_row_index() {
        assert_eq!(Position::Goalkeeper.index(), 0);
        assert_eq!(Position::Forward.index(), 3);
    }
}
