// crates/gazetteer-core/src/labels.rs

//! Static lookup tables: feature labels, Cameroon region names and the
//! feature-code groups used by the coverage analysis.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static FEATURE_TYPE_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("P", "Populated place"),
        ("H", "Hydrographic"),
        ("T", "Topographic"),
        ("S", "Spot"),
        ("L", "Area"),
    ])
});

static FEATURE_CODE_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("PPL", "Populated Place"),
        ("PPLA", "Seat of a first-order administrative division"),
        ("PPLA2", "Seat of a second-order administrative division"),
        ("PPLA3", "Seat of a third-order administrative division"),
        ("PPLA4", "Seat of a fourth-order administrative division"),
        ("PPLC", "Capital of a political entity"),
        ("STM", "Stream"),
        ("STMI", "Intermittent Stream"),
        ("HLL", "Hill"),
        ("MT", "Mountain"),
        ("LK", "Lake"),
        ("RESV", "Reservoir"),
        ("ISL", "Island"),
    ])
});

/// Administrative level-1 codes as used by the Cameroon extract.
/// `"00"` is the bucket for records without a region.
static CAMEROON_REGIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("00", "Non spécifié"),
        ("01", "Adamaoua"),
        ("02", "Centre"),
        ("03", "Est"),
        ("04", "Extrême-Nord"),
        ("05", "Littoral"),
        ("06", "Nord"),
        ("07", "Nord-Ouest"),
        ("08", "Ouest"),
        ("09", "Sud"),
        ("10", "Sud-Ouest"),
        ("11", "Est (alternatif)"),
        ("12", "Nord (alternatif)"),
        ("13", "Nord-Ouest (alternatif)"),
        ("14", "Centre (alternatif)"),
    ])
});

/// Region code used for records that carry no level-1 code.
pub const UNSPECIFIED_REGION: &str = "00";

/// The ten regions every complete extract is expected to cover.
pub const MAIN_REGIONS: [&str; 10] = ["01", "02", "03", "04", "05", "06", "07", "08", "09", "10"];

/// Regional capitals and the national capital.
pub const CITY_CODES: [&str; 5] = ["PPLA", "PPLA2", "PPLA3", "PPLA4", "PPLC"];

/// Sections and quarters of populated places.
pub const NEIGHBORHOOD_CODES: [&str; 2] = ["PPLX", "PPLQ"];

pub const POPULATED_PLACE_CODES: [&str; 15] = [
    "PPL", "PPLA", "PPLA2", "PPLA3", "PPLA4", "PPLC", "PPLF", "PPLG", "PPLH", "PPLL", "PPLQ",
    "PPLR", "PPLS", "PPLW", "PPLX",
];

/// Human-readable label for a feature type (`P`, `H`, ...). Input is trimmed.
///
/// ```rust
/// use gazetteer_core::labels::type_label;
///
/// assert_eq!(type_label("P"), Some("Populated place"));
/// assert_eq!(type_label("Z"), None);
/// ```
pub fn type_label(code: &str) -> Option<&'static str> {
    FEATURE_TYPE_LABELS.get(code.trim()).copied()
}

/// Human-readable label for a feature code (`PPLC`, `STM`, ...). Input is trimmed.
pub fn code_label(code: &str) -> Option<&'static str> {
    FEATURE_CODE_LABELS.get(code.trim()).copied()
}

pub fn region_name(code: &str) -> Option<&'static str> {
    CAMEROON_REGIONS.get(code).copied()
}

pub fn is_city(code: &str) -> bool {
    CITY_CODES.contains(&code)
}

pub fn is_neighborhood(code: &str) -> bool {
    NEIGHBORHOOD_CODES.contains(&code)
}

pub fn is_populated_place(code: &str) -> bool {
    POPULATED_PLACE_CODES.contains(&code)
}
