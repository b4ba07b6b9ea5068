//! Match and odds records passed between the pipeline stages.
//!
//! Odds are kept exactly as the model wrote them. Nothing here parses them
//! as numbers.

use serde_json::Value;

/// Home-win / draw / away-win odds ("1" / "0" / "2").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OddsTriplet {
    pub home: String,
    pub draw: String,
    pub away: String,
}

impl OddsTriplet {
    pub fn new(home: impl Into<String>, draw: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            draw: draw.into(),
            away: away.into(),
        }
    }

    /// Values in column order: 1, 0, 2.
    pub fn as_array(&self) -> [&str; 3] {
        [self.home.as_str(), self.draw.as_str(), self.away.as_str()]
    }
}

/// One betting line extracted from a bookmaker's screenshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOdds {
    /// Match description as shown by the bookmaker ("Slavia - Sparta")
    pub name: String,
    pub odds: OddsTriplet,
}

impl MatchOdds {
    pub fn new(name: impl Into<String>, odds: OddsTriplet) -> Self {
        Self {
            name: name.into(),
            odds,
        }
    }

    /// Builds a record from one element of the model's JSON array.
    ///
    /// Expects an object with a `match` key; `1`, `0` and `2` default to
    /// empty text when missing. Returns `None` for anything else.
    pub fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let name = object.get("match").and_then(json_text)?;
        let field = |key: &str| object.get(key).and_then(json_text).unwrap_or_default();

        Some(Self::new(name, OddsTriplet::new(field("1"), field("0"), field("2"))))
    }
}

/// Text form of a scalar JSON value. Numbers keep their JSON spelling.
fn json_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Two bookmakers' lines judged to describe the same match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchComparison {
    /// Match name as written by the left bookmaker
    pub name: String,
    pub left: OddsTriplet,
    pub right: OddsTriplet,
}

impl MatchComparison {
    pub fn merge(left: &MatchOdds, right: &MatchOdds) -> Self {
        Self {
            name: left.name.clone(),
            left: left.odds.clone(),
            right: right.odds.clone(),
        }
    }

    /// Cells in comparison-table column order.
    pub fn to_record(&self) -> [&str; 7] {
        let [l1, l0, l2] = self.left.as_array();
        let [r1, r0, r2] = self.right.as_array();
        [self.name.as_str(), l1, l0, l2, r1, r0, r2]
    }
}
