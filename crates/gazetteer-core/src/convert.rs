// crates/gazetteer-core/src/convert.rs

//! # Record Normalizer
//!
//! Raw row -> [`LocationRecord`]. Works on any [`FieldSource`], so the
//! positional and named layouts share one implementation. Normalization never
//! fails: missing columns read as empty and simply leave parts absent.

use crate::labels::{code_label, type_label};
use crate::model::{
    AdministrativeCodes, Coordinates, Country, Elevation, Feature, LocationRecord, Names,
    RecordMetadata,
};
use crate::raw::{Field, Layout};
use crate::traits::FieldSource;
use crate::value::{coerce, is_all_digits, Number, Scalar};

/// **Standard Converter:** Raw row -> LocationRecord.
pub fn normalize<S: FieldSource + ?Sized>(row: &S) -> LocationRecord {
    LocationRecord {
        id: row.field(Field::Id).trim().to_string(),
        names: names(row),
        coordinates: coordinates(row),
        feature: feature(row),
        country: Country {
            code: row.text(Field::CountryCode).map(str::to_string),
        },
        administrative: administrative(row),
        elevation: elevation(row).map(|meters| Elevation { meters }),
        population: population(row),
        timezone: row.text(Field::Timezone).map(str::to_string),
        metadata: RecordMetadata {
            modification_date: modification_date(row),
        },
    }
}

/// Both halves must be numeric, otherwise there are no coordinates at all.
fn coordinates<S: FieldSource + ?Sized>(row: &S) -> Option<Coordinates> {
    let latitude = numeric(row.field(Field::Latitude))?;
    let longitude = numeric(row.field(Field::Longitude))?;
    Some(Coordinates {
        latitude,
        longitude,
    })
}

fn names<S: FieldSource + ?Sized>(row: &S) -> Names {
    let primary = row.field(Field::NamePrimary).trim().to_string();
    let alternate = row.text(Field::NameAlternate).map(str::to_string);
    let alternatives = parse_alternatives(row.field(Field::NameAlternatives));

    let mut all: Vec<String> = Vec::with_capacity(2 + alternatives.len());
    let candidates = std::iter::once(&primary)
        .chain(alternate.as_ref())
        .chain(alternatives.iter());
    for name in candidates {
        if !name.is_empty() && !all.contains(name) {
            all.push(name.clone());
        }
    }

    Names {
        primary,
        alternate,
        alternatives,
        all,
    }
}

/// Splits the comma-separated alternatives column, dropping empty entries.
pub fn parse_alternatives(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|alt| !alt.is_empty())
        .map(str::to_string)
        .collect()
}

fn feature<S: FieldSource + ?Sized>(row: &S) -> Feature {
    let kind = row.text(Field::FeatureType);
    let code = row.text(Field::FeatureCode);
    Feature {
        kind: kind.map(str::to_string),
        code: code.map(str::to_string),
        type_label: kind.and_then(type_label).map(str::to_string),
        code_label: code.and_then(code_label).map(str::to_string),
    }
}

fn administrative<S: FieldSource + ?Sized>(row: &S) -> Option<AdministrativeCodes> {
    let codes: AdministrativeCodes = (1..=4)
        .filter_map(|level| {
            row.text(Field::AdminCode(level))
                .map(|code| (format!("level_{level}"), code.to_string()))
        })
        .collect();
    (!codes.is_empty()).then_some(codes)
}

/// The tab layout keeps the coerced number as written. The CSV layout always
/// reads the elevation as a float.
fn elevation<S: FieldSource + ?Sized>(row: &S) -> Option<Number> {
    match row.layout() {
        Layout::PositionalV1 => numeric(row.field(Field::Elevation)),
        Layout::NamedV2 => {
            let parsed = row
                .text(Field::Elevation)
                .and_then(|raw| raw.parse::<f64>().ok())
                .filter(|f| f.is_finite())?;
            let meters = if parsed == 0.0 {
                recover_swapped_elevation(row).unwrap_or(parsed)
            } else {
                parsed
            };
            Some(Number::Float(meters))
        }
    }
}

/// Upstream data-quality compensation for the named layout only.
///
/// Some rows of the CSV extract have the elevation and modification-date
/// columns swapped: `elevation` reads `0` and the real height sits in
/// `modification_date` as a bare number. When the elevation is exactly zero
/// and the date column is all digits, the date column is the elevation.
/// This is a one-off fix for that extract, not a general parsing rule.
fn recover_swapped_elevation<S: FieldSource + ?Sized>(row: &S) -> Option<f64> {
    row.text(Field::ModificationDate)
        .filter(|raw| is_all_digits(raw))
        .and_then(|raw| raw.parse::<f64>().ok())
}

/// Non-positive and non-integer values are absent.
fn population<S: FieldSource + ?Sized>(row: &S) -> Option<i64> {
    coerce(row.field(Field::Population))
        .as_ref()
        .and_then(Scalar::as_integer)
        .filter(|p| *p > 0)
}

/// An all-digit value is a stray number, not a date, and is discarded.
/// This also drops `YYYYMMDD` encodings, which matches the source data.
fn modification_date<S: FieldSource + ?Sized>(row: &S) -> Option<String> {
    row.text(Field::ModificationDate)
        .filter(|raw| !is_all_digits(raw))
        .map(str::to_string)
}

fn numeric(raw: &str) -> Option<Number> {
    coerce(raw).as_ref().and_then(Scalar::as_number)
}
