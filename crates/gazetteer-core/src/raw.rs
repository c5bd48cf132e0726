// crates/gazetteer-core/src/raw.rs

//! Raw input rows as they come out of the two source layouts.
//!
//! NOTE: These types mirror the external GeoNames-style extract. They only
//! borrow the underlying `csv::StringRecord`; nothing is copied until the
//! normalizer builds a [`crate::model::LocationRecord`].

use crate::traits::FieldSource;
use csv::{Position, StringRecord};
use std::collections::HashMap;

/// Number of columns in the tab-delimited extract.
pub const POSITIONAL_WIDTH: usize = 19;

/// Header of the comma-delimited layout, in column order.
pub const NAMED_HEADERS: [&str; 17] = [
    "id",
    "name_primary",
    "name_alternate",
    "name_alternatives",
    "latitude",
    "longitude",
    "feature_type",
    "feature_code",
    "country_code",
    "admin_code_1",
    "admin_code_2",
    "admin_code_3",
    "admin_code_4",
    "population",
    "elevation",
    "timezone",
    "modification_date",
];

/// Which of the two source layouts a row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Tab-delimited, no header, 19 positions.
    PositionalV1,
    /// Comma-delimited with a header row, 17 named columns.
    NamedV2,
}

/// The semantic columns shared by both layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    NamePrimary,
    NameAlternate,
    NameAlternatives,
    Latitude,
    Longitude,
    FeatureType,
    FeatureCode,
    CountryCode,
    /// Administrative code for levels 1 to 4.
    AdminCode(u8),
    Population,
    Elevation,
    Timezone,
    ModificationDate,
}

impl Field {
    /// Column index in the tab-delimited extract. Positions 9, 11-13 and 15
    /// are unused and the extract only carries the level-1 admin code.
    pub fn position(self) -> Option<usize> {
        Some(match self {
            Field::Id => 0,
            Field::NamePrimary => 1,
            Field::NameAlternate => 2,
            Field::NameAlternatives => 3,
            Field::Latitude => 4,
            Field::Longitude => 5,
            Field::FeatureType => 6,
            Field::FeatureCode => 7,
            Field::CountryCode => 8,
            Field::AdminCode(1) => 10,
            Field::AdminCode(_) => return None,
            Field::Population => 14,
            Field::Elevation => 16,
            Field::Timezone => 17,
            Field::ModificationDate => 18,
        })
    }

    /// Header name in the comma-delimited layout.
    pub fn column_name(self) -> Option<&'static str> {
        Some(match self {
            Field::Id => "id",
            Field::NamePrimary => "name_primary",
            Field::NameAlternate => "name_alternate",
            Field::NameAlternatives => "name_alternatives",
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::FeatureType => "feature_type",
            Field::FeatureCode => "feature_code",
            Field::CountryCode => "country_code",
            Field::AdminCode(1) => "admin_code_1",
            Field::AdminCode(2) => "admin_code_2",
            Field::AdminCode(3) => "admin_code_3",
            Field::AdminCode(4) => "admin_code_4",
            Field::AdminCode(_) => return None,
            Field::Population => "population",
            Field::Elevation => "elevation",
            Field::Timezone => "timezone",
            Field::ModificationDate => "modification_date",
        })
    }

    /// The semantic fields in `NAMED_HEADERS` order.
    pub const NAMED_ORDER: [Field; 17] = [
        Field::Id,
        Field::NamePrimary,
        Field::NameAlternate,
        Field::NameAlternatives,
        Field::Latitude,
        Field::Longitude,
        Field::FeatureType,
        Field::FeatureCode,
        Field::CountryCode,
        Field::AdminCode(1),
        Field::AdminCode(2),
        Field::AdminCode(3),
        Field::AdminCode(4),
        Field::Population,
        Field::Elevation,
        Field::Timezone,
        Field::ModificationDate,
    ];
}

// -----------------------------------------------------------------------------
// POSITIONAL LAYOUT
// -----------------------------------------------------------------------------

/// One line of the tab-delimited extract.
///
/// Short rows behave as if right-padded with empty strings.
#[derive(Debug, Clone, Copy)]
pub struct PositionalRow<'a> {
    record: &'a StringRecord,
}

impl<'a> PositionalRow<'a> {
    pub fn new(record: &'a StringRecord) -> Self {
        Self { record }
    }

    /// A line with no content at all (only delimiters or whitespace).
    pub fn is_blank(&self) -> bool {
        self.record.iter().all(|f| f.trim().is_empty())
    }

    pub fn column(&self, index: usize) -> &'a str {
        self.record.get(index).unwrap_or("")
    }

    /// Where the row starts in the input, when the reader tracked it.
    pub fn position(&self) -> Option<&'a Position> {
        self.record.position()
    }
}

impl FieldSource for PositionalRow<'_> {
    fn layout(&self) -> Layout {
        Layout::PositionalV1
    }

    fn field(&self, field: Field) -> &str {
        field.position().map_or("", |i| self.column(i))
    }
}

// -----------------------------------------------------------------------------
// NAMED LAYOUT
// -----------------------------------------------------------------------------

/// Header name to column index, built once per file.
#[derive(Debug, Clone, Default)]
pub struct ColumnMapping {
    name_to_index: HashMap<String, usize>,
}

impl ColumnMapping {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let name_to_index = headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name.trim().to_string(), index))
            .collect();
        Self { name_to_index }
    }

    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Expected columns that the header does not declare.
    pub fn missing_columns(&self) -> Vec<&'static str> {
        NAMED_HEADERS
            .iter()
            .copied()
            .filter(|name| !self.name_to_index.contains_key(*name))
            .collect()
    }
}

/// One data row of the comma-delimited layout.
#[derive(Debug, Clone, Copy)]
pub struct NamedRow<'a> {
    record: &'a StringRecord,
    mapping: &'a ColumnMapping,
}

impl<'a> NamedRow<'a> {
    pub fn new(record: &'a StringRecord, mapping: &'a ColumnMapping) -> Self {
        Self { record, mapping }
    }
}

impl FieldSource for NamedRow<'_> {
    fn layout(&self) -> Layout {
        Layout::NamedV2
    }

    fn field(&self, field: Field) -> &str {
        field
            .column_name()
            .and_then(|name| self.mapping.get_index(name))
            .and_then(|i| self.record.get(i))
            .unwrap_or("")
    }
}
