//! Generic field access over entity records.
//!
//! The list engine never knows the concrete record type. Each entity exposes
//! its filterable/sortable fields through a small `Copy` field enum and
//! [`Entity::value`], which returns a borrowed [`FieldValue`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Entity type discriminator, used in errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Company,
    Contact,
    Deal,
    Meeting,
    Objection,
    Faq,
    DiscoveryQuestion,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            EntityKind::Company => "Company",
            EntityKind::Contact => "Contact",
            EntityKind::Deal => "Deal",
            EntityKind::Meeting => "Meeting",
            EntityKind::Objection => "Objection",
            EntityKind::Faq => "FAQ",
            EntityKind::DiscoveryQuestion => "DiscoveryQuestion",
        };
        write!(f, "{}", value)
    }
}

/// A borrowed view of one field of one record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// Absent or explicitly null.
    Null,
    /// Plain text, enum label or date-string. An empty string is a value.
    Text(&'a str),
    Number(f64),
    /// Multi-valued field, treated as a set of strings.
    List(Vec<&'a str>),
}

impl<'a> FieldValue<'a> {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Lift an optional string field.
    pub fn opt_text(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Text)
    }

    /// Lift an optional number field.
    pub fn opt_number(value: Option<f64>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Number)
    }

    pub fn list(values: &'a [String]) -> Self {
        FieldValue::List(values.iter().map(String::as_str).collect())
    }

    /// Scalar text of this value, if it has one.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// `String(value)`: the text used for lexical comparison and display.
    pub fn to_display_string(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Text(text) => (*text).to_string(),
            FieldValue::Number(n) => format_number(*n),
            FieldValue::List(items) => items.join(", "),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// A record the list engine can filter, sort and select.
pub trait Entity {
    /// Field selector for this entity. Small and `Copy`, usually a fieldless enum.
    type Field: Copy + Eq + Hash + fmt::Debug + 'static;

    const KIND: EntityKind;

    /// Stable, unique record key. Never derived from mutable fields.
    fn id(&self) -> &str;

    fn value(&self, field: Self::Field) -> FieldValue<'_>;
}
