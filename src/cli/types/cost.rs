//! Player cost in tenths of a million.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Player price as published upstream (`now_cost`), stored in tenths.
///
/// `Cost(55)` is £5.5m. Unsigned, so a cost can never be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Cost(pub u16);

impl Cost {
    pub fn from_tenths(tenths: u16) -> Self {
        Self(tenths)
    }

    pub fn tenths(&self) -> u16 {
        self.0
    }

    /// Price in millions, e.g. `5.5`.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0) / 10.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "£{}.{}m", self.0 / 10, self.0 % 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_conversion() {
        assert_eq!(Cost::from_tenths(55).as_f64(), 5.5);
        assert_eq!(Cost::from_tenths(130).as_f64(), 13.0);
        assert!(Cost::default().is_zero());
    }

    #[test]
    fn test_cost_display() {
        assert_eq!(Cost::from_tenths(45).to_string(), "£4.5m");
        assert_eq!(Cost::from_tenths(100).to_string(), "£10.0m");
    }
}
