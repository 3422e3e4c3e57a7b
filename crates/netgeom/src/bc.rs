//! Boundary-condition labels carried by network vertices.
//!
//! A label is a condition kind plus one real parameter. The ASCII form
//! round-trips: `"DIR 0.5"` parses, and the record prints as
//! `"BC DIR 0.50000000"` (the leading `BC` is accepted back on parse).
//! `NONE` and `INT` carry no parameter; a supplied value is read and
//! pinned to zero, and printing omits it.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Condition kind, named by its ASCII token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BcKind {
    /// No condition assigned yet.
    #[default]
    None,
    /// Internal vertex, not exposed to any boundary.
    Internal,
    Dirichlet,
    Neumann,
    Mixed,
    Other,
}

impl BcKind {
    /// The token used in the ASCII form.
    pub fn token(self) -> &'static str {
        match self {
            BcKind::None => "NONE",
            BcKind::Internal => "INT",
            BcKind::Dirichlet => "DIR",
            BcKind::Neumann => "NEU",
            BcKind::Mixed => "MIX",
            BcKind::Other => "OTHER",
        }
    }

    /// Whether the value slot means anything for this kind.
    #[inline]
    pub fn carries_value(self) -> bool {
        !matches!(self, BcKind::None | BcKind::Internal)
    }
}

/// Parse failure for [`BoundaryCondition`].
#[derive(Debug, Error, PartialEq)]
pub enum ParseBcError {
    #[error("unknown boundary-condition kind `{0}`")]
    UnknownKind(String),
    #[error("missing boundary-condition value")]
    MissingValue,
    #[error("malformed boundary-condition value `{0}`")]
    BadValue(String),
    #[error("unexpected trailing input")]
    TrailingInput,
}

/// A condition kind with its parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundaryCondition {
    pub kind: BcKind,
    pub value: f64,
}

impl BoundaryCondition {
    /// Build a label; valueless kinds have their parameter pinned to zero
    /// so equality stays usable.
    pub fn new(kind: BcKind, value: f64) -> Self {
        let value = if kind.carries_value() { value } else { 0.0 };
        Self { kind, value }
    }
}

impl FromStr for BoundaryCondition {
    type Err = ParseBcError;

    /// Whitespace-separated tokens: an optional `BC` marker, the kind,
    /// then the value. The value is required for kinds that carry one and
    /// optional for `NONE`/`INT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace().peekable();
        if parts.peek().copied() == Some("BC") {
            parts.next();
        }
        let kind = match parts.next() {
            Some("NONE") => BcKind::None,
            Some("INT") => BcKind::Internal,
            Some("DIR") => BcKind::Dirichlet,
            Some("NEU") => BcKind::Neumann,
            Some("MIX") => BcKind::Mixed,
            Some("OTHER") => BcKind::Other,
            Some(other) => return Err(ParseBcError::UnknownKind(other.to_string())),
            None => return Err(ParseBcError::UnknownKind(String::new())),
        };
        let value = match parts.next() {
            Some(raw) => raw
                .parse::<f64>()
                .map_err(|_| ParseBcError::BadValue(raw.to_string()))?,
            None if kind.carries_value() => return Err(ParseBcError::MissingValue),
            None => 0.0,
        };
        if parts.next().is_some() {
            return Err(ParseBcError::TrailingInput);
        }
        Ok(BoundaryCondition::new(kind, value))
    }
}

impl fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.carries_value() {
            write!(f, "BC {} {:.8}", self.kind.token(), self.value)
        } else {
            write!(f, "BC {}", self.kind.token())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_kind() {
        let cases = [
            ("NONE 0", BcKind::None),
            ("INT 0", BcKind::Internal),
            ("DIR 1.5", BcKind::Dirichlet),
            ("NEU -2.0", BcKind::Neumann),
            ("MIX 0.25", BcKind::Mixed),
            ("OTHER 9", BcKind::Other),
        ];
        for (text, kind) in cases {
            let bc: BoundaryCondition = text.parse().unwrap();
            assert_eq!(bc.kind, kind, "{text}");
        }
    }

    #[test]
    fn valueless_kinds_pin_to_zero() {
        let bc: BoundaryCondition = "NONE 7.5".parse().unwrap();
        assert_eq!(bc.value, 0.0);
        let bc: BoundaryCondition = "INT -3".parse().unwrap();
        assert_eq!(bc.value, 0.0);
        assert_eq!(BoundaryCondition::new(BcKind::Internal, 4.0).value, 0.0);
    }

    #[test]
    fn value_is_required_when_meaningful() {
        assert_eq!(
            "DIR".parse::<BoundaryCondition>(),
            Err(ParseBcError::MissingValue)
        );
        // ...but optional where it means nothing.
        assert!("NONE".parse::<BoundaryCondition>().is_ok());
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            "ROBIN 1.0".parse::<BoundaryCondition>(),
            Err(ParseBcError::UnknownKind(_))
        ));
        assert!(matches!(
            "DIR abc".parse::<BoundaryCondition>(),
            Err(ParseBcError::BadValue(_))
        ));
        assert_eq!(
            "DIR 1.0 extra".parse::<BoundaryCondition>(),
            Err(ParseBcError::TrailingInput)
        );
        assert!(matches!(
            "".parse::<BoundaryCondition>(),
            Err(ParseBcError::UnknownKind(_))
        ));
    }

    #[test]
    fn display_uses_fixed_precision() {
        let bc = BoundaryCondition::new(BcKind::Dirichlet, 0.5);
        assert_eq!(bc.to_string(), "BC DIR 0.50000000");
        let bc = BoundaryCondition::new(BcKind::Neumann, -1.25);
        assert_eq!(bc.to_string(), "BC NEU -1.25000000");
        assert_eq!(BoundaryCondition::default().to_string(), "BC NONE");
    }

    #[test]
    fn display_then_parse_round_trips() {
        let cases = [
            BoundaryCondition::new(BcKind::None, 0.0),
            BoundaryCondition::new(BcKind::Internal, 0.0),
            BoundaryCondition::new(BcKind::Dirichlet, 1.5),
            BoundaryCondition::new(BcKind::Mixed, -0.125),
        ];
        for bc in cases {
            let back: BoundaryCondition = bc.to_string().parse().unwrap();
            assert_eq!(back, bc);
        }
    }
}
