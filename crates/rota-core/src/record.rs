//! Match records

use crate::address::CellAddress;
use std::fmt;

/// One of the ten labelled components of a match record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
}

impl Field {
    /// All fields in label order
    pub const ALL: [Field; 10] = [
        Field::A,
        Field::B,
        Field::C,
        Field::D,
        Field::E,
        Field::F,
        Field::G,
        Field::H,
        Field::I,
        Field::J,
    ];

    /// The single-letter label
    pub fn letter(&self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
            Self::H => 'H',
            Self::I => 'I',
            Self::J => 'J',
        }
    }

    /// Where the value comes from, for display
    pub fn description(&self) -> &'static str {
        match self {
            Self::A => "matched cell",
            Self::B => "header",
            Self::C => "group header",
            Self::D => "one row below",
            Self::E => "one column right",
            Self::F => "two rows below",
            Self::G => "two rows below, one column right",
            Self::H => "three rows below",
            Self::I => "sheet title",
            Self::J => "sheet period",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Trimmed values for fields A through J (any of them may be empty)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub struct Components {
    pub a: String,
    pub b: String,
    pub c: String,
    pub d: String,
    pub e: String,
    pub f: String,
    pub g: String,
    pub h: String,
    pub i: String,
    pub j: String,
}

impl Components {
    /// Value of a single field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::A => &self.a,
            Field::B => &self.b,
            Field::C => &self.c,
            Field::D => &self.d,
            Field::E => &self.e,
            Field::F => &self.f,
            Field::G => &self.g,
            Field::H => &self.h,
            Field::I => &self.i,
            Field::J => &self.j,
        }
    }

    /// Iterate `(field, value)` pairs in label order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Render the schedule line
    ///
    /// `I - J - D - B (C) - E - F - G - H`. Empty fields still produce their
    /// segment, so the separators are always present.
    pub fn format_line(&self) -> String {
        format!(
            "{} - {} - {} - {} ({}) - {} - {} - {} - {}",
            self.i, self.j, self.d, self.b, self.c, self.e, self.f, self.g, self.h
        )
    }
}

/// The reconstructed schedule line for one matching cell
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchRecord {
    /// Trimmed text of the matching cell
    pub raw: String,
    pub components: Components,
    /// Display line, see [`Components::format_line`]
    pub formatted: String,
    /// Where the match was found; unique within one search
    pub coordinates: CellAddress,
}

impl MatchRecord {
    /// Build a record, deriving `formatted` from the components
    pub fn new(coordinates: CellAddress, raw: impl Into<String>, components: Components) -> Self {
        let formatted = components.format_line();
        Self {
            raw: raw.into(),
            components,
            formatted,
            coordinates,
        }
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn components() -> Components {
        Components {
            a: "123456789".into(),
            b: "Counter".into(),
            c: "Morning".into(),
            d: "07:00".into(),
            e: "Lan".into(),
            f: "11:00".into(),
            g: "x".into(),
            h: "Note".into(),
            i: "Station rota".into(),
            j: "2024-01".into(),
        }
    }

    #[test]
    fn test_format_line() {
        assert_eq!(
            components().format_line(),
            "Station rota - 2024-01 - 07:00 - Counter (Morning) - Lan - 11:00 - x - Note"
        );
    }

    #[test]
    fn test_format_line_keeps_empty_segments() {
        assert_eq!(Components::default().format_line(), " -  -  -  () -  -  -  - ");
    }

    #[test]
    fn test_get_and_iter() {
        let c = components();
        assert_eq!(c.get(Field::E), "Lan");
        let letters: String = c.iter().map(|(f, _)| f.letter()).collect();
        assert_eq!(letters, "ABCDEFGHIJ");
        assert_eq!(c.iter().nth(8), Some((Field::I, "Station rota")));
    }

    #[test]
    fn test_record_new() {
        let record = MatchRecord::new(CellAddress::new(6, 1), "123456789", components());
        assert_eq!(record.formatted, components().format_line());
        assert_eq!(record.to_string(), record.formatted);
        assert_eq!(record.coordinates.to_string(), "B7");
    }
}
