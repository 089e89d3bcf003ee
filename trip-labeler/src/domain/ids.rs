//! Feed identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when constructing an invalid feed identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid feed identifier: {reason}")]
pub struct InvalidId {
    reason: &'static str,
}

/// A route identifier from the feed.
///
/// Route identifiers are opaque strings assigned by the operator's feed
/// (this network uses small numeric strings like `"1"`). The only
/// validation is that they must be non-empty.
///
/// # Examples
///
/// ```
/// use trip_labeler::domain::RouteId;
///
/// let id = RouteId::new("1".to_string()).unwrap();
/// assert_eq!(id.as_str(), "1");
///
/// // Empty strings are rejected
/// assert!(RouteId::new("".to_string()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RouteId(String);

impl RouteId {
    /// Create a new route identifier from a string.
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: String) -> Result<Self, InvalidId> {
        if s.is_empty() {
            return Err(InvalidId {
                reason: "route identifier cannot be empty",
            });
        }
        Ok(RouteId(s))
    }

    /// Returns the route identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the RouteId and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RouteId {
    type Error = InvalidId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        RouteId::new(s)
    }
}

impl From<RouteId> for String {
    fn from(id: RouteId) -> Self {
        id.0
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A trip identifier from the feed.
///
/// Like [`RouteId`], trip identifiers are opaque non-empty strings.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TripId(String);

impl TripId {
    /// Create a new trip identifier from a string.
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: String) -> Result<Self, InvalidId> {
        if s.is_empty() {
            return Err(InvalidId {
                reason: "trip identifier cannot be empty",
            });
        }
        Ok(TripId(s))
    }

    /// Returns the trip identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the TripId and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for TripId {
    type Error = InvalidId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        TripId::new(s)
    }
}

impl From<TripId> for String {
    fn from(id: TripId) -> Self {
        id.0
    }
}

impl fmt::Debug for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TripId({})", self.0)
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid_route_id() {
        assert!(RouteId::new("1".to_string()).is_ok());
        assert!(RouteId::new("122".to_string()).is_ok());
        // Feed identifiers can be arbitrary text
        assert!(RouteId::new("express-north".to_string()).is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(RouteId::new("".to_string()).is_err());
        assert!(TripId::new("".to_string()).is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        let id = RouteId::new("7".to_string()).unwrap();
        assert_eq!(id.as_str(), "7");

        let id = TripId::new("trip-42".to_string()).unwrap();
        assert_eq!(id.as_str(), "trip-42");
    }

    #[test]
    fn into_inner() {
        let id = RouteId::new("3".to_string()).unwrap();
        assert_eq!(id.into_inner(), "3".to_string());
    }

    #[test]
    fn display() {
        let id = RouteId::new("5".to_string()).unwrap();
        assert_eq!(format!("{}", id), "5");
    }

    #[test]
    fn debug() {
        let id = TripId::new("trip-1".to_string()).unwrap();
        assert_eq!(format!("{:?}", id), "TripId(trip-1)");
    }

    #[test]
    fn equality() {
        let a = RouteId::new("1".to_string()).unwrap();
        let b = RouteId::new("1".to_string()).unwrap();
        let c = RouteId::new("2".to_string()).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(RouteId::new("1".to_string()).unwrap());
        assert!(set.contains(&RouteId::new("1".to_string()).unwrap()));
        assert!(!set.contains(&RouteId::new("2".to_string()).unwrap()));
    }

    #[test]
    fn serde_as_plain_string() {
        let id = RouteId::new("6".to_string()).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"6\"");

        let back: RouteId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        // Validation applies on the way in
        assert!(serde_json::from_str::<RouteId>("\"\"").is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-empty string is a valid identifier
        #[test]
        fn nonempty_always_valid(s in ".+") {
            prop_assert!(RouteId::new(s.clone()).is_ok());
            prop_assert!(TripId::new(s).is_ok());
        }

        /// Roundtrip: new then as_str returns the original
        #[test]
        fn roundtrip(s in ".+") {
            let id = RouteId::new(s.clone()).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }
    }
}
