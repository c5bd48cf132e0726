// crates/gazetteer-core/src/stats.rs

//! # Corpus Statistics
//!
//! Aggregate counts over a full record collection: per region, per feature
//! type/code, per code group, and completeness of the essential fields.

use crate::config::CompletenessThresholds;
use crate::labels::{self, MAIN_REGIONS, UNSPECIFIED_REGION};
use crate::model::LocationRecord;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Simple aggregate statistics for a record collection.
///
/// Region maps are keyed by level-1 code. Records without one are counted
/// under [`UNSPECIFIED_REGION`] so that region counts always sum to
/// `total_locations`. Records without a feature type or code are left out of
/// the corresponding feature maps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusStatistics {
    pub total_locations: usize,
    pub regions: BTreeMap<String, usize>,
    /// Feature-code breakdown per region.
    pub region_features: BTreeMap<String, BTreeMap<String, usize>>,
    pub feature_types: HashMap<String, usize>,
    pub feature_codes: HashMap<String, usize>,
    pub cities: usize,
    pub neighborhoods: usize,
    pub populated_places: usize,
    pub cities_by_region: BTreeMap<String, usize>,
    pub neighborhoods_by_region: BTreeMap<String, usize>,
    pub with_coordinates: usize,
    pub with_primary_name: usize,
    pub with_region: usize,
    pub with_elevation: usize,
    pub with_population: usize,
}

impl CorpusStatistics {
    pub fn compute(records: &[LocationRecord]) -> Self {
        let mut stats = Self {
            total_locations: records.len(),
            ..Default::default()
        };

        for record in records {
            let region = record.region_code().unwrap_or(UNSPECIFIED_REGION);
            *stats.regions.entry(region.to_string()).or_default() += 1;

            if let Some(kind) = record.feature_type() {
                *stats.feature_types.entry(kind.to_string()).or_default() += 1;
            }

            if let Some(code) = record.feature_code() {
                *stats.feature_codes.entry(code.to_string()).or_default() += 1;
                *stats
                    .region_features
                    .entry(region.to_string())
                    .or_default()
                    .entry(code.to_string())
                    .or_default() += 1;

                if labels::is_city(code) {
                    stats.cities += 1;
                    *stats.cities_by_region.entry(region.to_string()).or_default() += 1;
                }
                if labels::is_neighborhood(code) {
                    stats.neighborhoods += 1;
                    *stats
                        .neighborhoods_by_region
                        .entry(region.to_string())
                        .or_default() += 1;
                }
                if labels::is_populated_place(code) {
                    stats.populated_places += 1;
                }
            }

            if record.coordinates.is_some() {
                stats.with_coordinates += 1;
            }
            if !record.name().is_empty() {
                stats.with_primary_name += 1;
            }
            if record.region_code().is_some() {
                stats.with_region += 1;
            }
            if record.elevation.is_some() {
                stats.with_elevation += 1;
            }
            if record.population.is_some() {
                stats.with_population += 1;
            }
        }

        stats
    }

    /// The `n` most frequent feature types, most frequent first.
    pub fn top_feature_types(&self, n: usize) -> Vec<(&str, usize)> {
        top_n(&self.feature_types, n)
    }

    /// The `n` most frequent feature codes, most frequent first.
    pub fn top_feature_codes(&self, n: usize) -> Vec<(&str, usize)> {
        top_n(&self.feature_codes, n)
    }

    pub fn feature_code_count(&self, code: &str) -> usize {
        self.feature_codes.get(code).copied().unwrap_or(0)
    }

    pub fn coordinates_ratio(&self) -> f64 {
        ratio(self.with_coordinates, self.total_locations)
    }

    pub fn names_ratio(&self) -> f64 {
        ratio(self.with_primary_name, self.total_locations)
    }

    pub fn region_ratio(&self) -> f64 {
        ratio(self.with_region, self.total_locations)
    }

    /// Main regions (`01`-`10`) without a single record.
    pub fn missing_main_regions(&self) -> Vec<&'static str> {
        MAIN_REGIONS
            .iter()
            .copied()
            .filter(|code| !self.regions.contains_key(*code))
            .collect()
    }

    /// Enough records and at least `min_cities` city-like records. A corpus
    /// without any city-like record is never complete.
    pub fn is_complete(&self, thresholds: &CompletenessThresholds) -> bool {
        self.total_locations >= thresholds.min_locations
            && self.cities >= thresholds.min_cities.max(1)
    }

    pub fn assess(&self, thresholds: &CompletenessThresholds) -> Assessment {
        let is_complete = self.is_complete(thresholds);
        let mut warnings = Vec::new();

        if self.total_locations < thresholds.min_locations {
            warnings.push(format!(
                "only {} locations, expected at least {}",
                self.total_locations, thresholds.min_locations
            ));
        }
        if self.cities == 0 {
            warnings.push("no major city found".to_string());
        } else if self.cities < thresholds.min_cities {
            warnings.push(format!(
                "only {} major cities, expected at least {}",
                self.cities, thresholds.min_cities
            ));
        }
        if self.neighborhoods == 0 {
            warnings.push("no neighborhood found".to_string());
        }
        for code in self.missing_main_regions() {
            let name = labels::region_name(code).unwrap_or(code);
            warnings.push(format!("missing region {name} ({code})"));
        }

        Assessment {
            total_locations: self.total_locations,
            cities: self.cities,
            neighborhoods: self.neighborhoods,
            populated_places: self.populated_places,
            regions: self.regions.len(),
            is_complete,
            ready: is_complete && self.neighborhoods > 0,
            warnings,
        }
    }
}

/// Outcome of checking a corpus against [`CompletenessThresholds`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub total_locations: usize,
    pub cities: usize,
    pub neighborhoods: usize,
    pub populated_places: usize,
    pub regions: usize,
    pub is_complete: bool,
    /// Complete and covering neighborhoods too.
    pub ready: bool,
    pub warnings: Vec<String>,
}

fn top_n(counts: &HashMap<String, usize>, n: usize) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries.truncate(n);
    entries
}

fn ratio(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coordinates, Feature, Names};
    use crate::value::Number;

    fn record(id: &str, code: &str, region: Option<&str>) -> LocationRecord {
        LocationRecord {
            id: id.into(),
            names: Names {
                primary: format!("Place {id}"),
                ..Default::default()
            },
            coordinates: Some(Coordinates {
                latitude: Number::Float(4.0),
                longitude: Number::Float(11.0),
            }),
            feature: Feature {
                kind: Some("P".into()),
                code: Some(code.into()),
                ..Default::default()
            },
            administrative: region.map(|r| BTreeMap::from([("level_1".to_string(), r.to_string())])),
            ..Default::default()
        }
    }

    fn sample() -> Vec<LocationRecord> {
        vec![
            record("1", "PPLC", Some("02")),
            record("2", "PPLA", Some("05")),
            record("3", "PPL", Some("05")),
            record("4", "PPLX", Some("05")),
            record("5", "PPL", None),
            record("6", "STM", Some("14")),
        ]
    }

    #[test]
    fn region_counts_sum_to_total() {
        let stats = CorpusStatistics::compute(&sample());
        assert_eq!(stats.regions.values().sum::<usize>(), 6);
        assert_eq!(stats.regions.get("00"), Some(&1));
        assert_eq!(stats.regions.get("05"), Some(&3));
        assert_eq!(stats.with_region, 5);
    }

    #[test]
    fn code_groups_are_counted() {
        let stats = CorpusStatistics::compute(&sample());
        assert_eq!(stats.cities, 2);
        assert_eq!(stats.neighborhoods, 1);
        assert_eq!(stats.populated_places, 5);
        assert_eq!(stats.cities_by_region.get("02"), Some(&1));
        assert_eq!(stats.neighborhoods_by_region.get("05"), Some(&1));
        assert_eq!(stats.region_features["05"]["PPL"], 1);
    }

    #[test]
    fn top_n_orders_by_frequency_then_code() {
        let stats = CorpusStatistics::compute(&sample());
        assert_eq!(stats.top_feature_codes(2), [("PPL", 2), ("PPLA", 1)]);
        assert_eq!(stats.top_feature_types(5), [("P", 6)]);
        assert_eq!(stats.feature_code_count("PPL"), 2);
        assert_eq!(stats.feature_code_count("LK"), 0);
    }

    #[test]
    fn no_cities_means_incomplete() {
        let records: Vec<LocationRecord> =
            (0..30).map(|i| record(&i.to_string(), "PPL", Some("01"))).collect();
        let stats = CorpusStatistics::compute(&records);
        let lenient = CompletenessThresholds {
            min_locations: 10,
            min_cities: 0,
        };
        assert!(!stats.is_complete(&lenient));
        assert!(!stats.is_complete(&CompletenessThresholds::default()));
    }

    #[test]
    fn thresholds_are_configurable() {
        let stats = CorpusStatistics::compute(&sample());
        assert!(!stats.is_complete(&CompletenessThresholds::default()));

        let small = CompletenessThresholds {
            min_locations: 6,
            min_cities: 2,
        };
        assert!(stats.is_complete(&small));

        let assessment = stats.assess(&small);
        assert!(assessment.is_complete);
        assert!(assessment.ready);
        assert!(assessment
            .warnings
            .iter()
            .any(|w| w.contains("Adamaoua (01)")));
    }

    #[test]
    fn ratios_handle_empty_corpus() {
        let stats = CorpusStatistics::compute(&[]);
        assert_eq!(stats.coordinates_ratio(), 0.0);
        assert_eq!(stats.missing_main_regions().len(), 10);
        let assessment = stats.assess(&CompletenessThresholds::default());
        assert!(!assessment.is_complete);
        assert!(!assessment.ready);
        assert!(assessment.warnings.iter().any(|w| w == "no major city found"));
    }

    #[test]
    fn completeness_ratios() {
        let mut records = sample();
        records[0].coordinates = None;
        records[1].names.primary.clear();
        let stats = CorpusStatistics::compute(&records);
        assert!((stats.coordinates_ratio() - 5.0 / 6.0).abs() < 1e-9);
        assert!((stats.names_ratio() - 5.0 / 6.0).abs() < 1e-9);
        assert!((stats.region_ratio() - 5.0 / 6.0).abs() < 1e-9);
    }
}
