// crates/gazetteer-core/src/report.rs

//! Human-readable renderings of conversion and analysis results.
//! Both are plain `Display` impls so the CLI decides where they go.

use crate::common::RunReport;
use crate::config::CompletenessThresholds;
use crate::labels;
use crate::model::CorpusMetadata;
use crate::stats::CorpusStatistics;
use std::fmt;
use std::path::Path;

const RULE: &str = "================================================================================";

/// Number of entries shown in the conversion summary top lists.
pub const SUMMARY_TOP_N: usize = 5;
/// Number of feature codes shown in the analysis report.
pub const ANALYSIS_TOP_N: usize = 20;

/// Console summary printed after a conversion.
pub struct ConversionSummary<'a> {
    pub run: &'a RunReport,
    pub output: &'a Path,
    pub output_bytes: u64,
    pub stats: &'a CorpusStatistics,
}

impl fmt::Display for ConversionSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Conversion finished")?;
        writeln!(f, "- Rows processed: {}", self.run.processed)?;
        writeln!(f, "- Errors: {}", self.run.errors)?;
        if self.run.dropped > 0 {
            writeln!(f, "- Rows without id (skipped): {}", self.run.dropped)?;
        }
        writeln!(f, "- Locations converted: {}", self.stats.total_locations)?;
        writeln!(f, "- Output: {}", self.output.display())?;
        writeln!(f, "- Size: {:.2} MB", megabytes(self.output_bytes))?;
        writeln!(f)?;
        writeln!(f, "Statistics:")?;
        writeln!(
            f,
            "- Towns and villages (PPL): {}",
            self.stats.feature_code_count("PPL")
        )?;
        writeln!(f, "- Locations with elevation: {}", self.stats.with_elevation)?;
        writeln!(f, "- Locations with population: {}", self.stats.with_population)?;
        writeln!(f, "- Feature types: {}", self.stats.feature_types.len())?;
        for (kind, count) in self.stats.top_feature_types(SUMMARY_TOP_N) {
            writeln!(f, "  • {kind}: {count}")?;
        }
        writeln!(f, "- Feature codes: {}", self.stats.feature_codes.len())?;
        for (code, count) in self.stats.top_feature_codes(SUMMARY_TOP_N) {
            writeln!(f, "  • {code}: {count}")?;
        }
        Ok(())
    }
}

/// Full coverage report for a corpus file.
pub struct AnalysisReport<'a> {
    pub path: &'a Path,
    pub metadata: &'a CorpusMetadata,
    pub stats: &'a CorpusStatistics,
    pub thresholds: &'a CompletenessThresholds,
}

impl AnalysisReport<'_> {
    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analysis of {}", self.path.display())?;
        writeln!(f, "{RULE}")?;
        writeln!(f)?;
        writeln!(f, "Metadata:")?;
        writeln!(
            f,
            "   - Declared total: {}",
            group_thousands(self.metadata.total_locations)
        )?;
        writeln!(
            f,
            "   - Actual total: {}",
            group_thousands(self.stats.total_locations)
        )?;
        writeln!(f, "   - Source: {}", or_na(&self.metadata.source))?;
        writeln!(
            f,
            "   - Generated at: {}",
            self.metadata.generated_at.as_deref().unwrap_or("N/A")
        )
    }

    fn write_distributions(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Distribution by region:")?;
        for (code, count) in &self.stats.regions {
            writeln!(
                f,
                "   - {} ({code}): {} locations",
                region_label(code),
                group_thousands(*count)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Distribution by feature type:")?;
        let mut types: Vec<(&String, &usize)> = self.stats.feature_types.iter().collect();
        types.sort();
        for (kind, count) in types {
            let label = labels::type_label(kind)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Type {kind}"));
            writeln!(f, "      - {label} ({kind}): {}", group_thousands(*count))?;
        }

        writeln!(f)?;
        writeln!(f, "   By feature code (top {ANALYSIS_TOP_N}):")?;
        for (code, count) in self.stats.top_feature_codes(ANALYSIS_TOP_N) {
            let label = labels::code_label(code).unwrap_or(code);
            writeln!(f, "      - {label} ({code}): {}", group_thousands(count))?;
        }
        Ok(())
    }

    fn write_coverage(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats;
        let total = group_thousands(stats.total_locations);

        writeln!(f)?;
        writeln!(f, "Cities and neighborhoods:")?;
        writeln!(
            f,
            "   - Major cities (PPLA, PPLA2, ...): {}",
            group_thousands(stats.cities)
        )?;
        writeln!(
            f,
            "   - Neighborhoods (PPLX, PPLQ): {}",
            group_thousands(stats.neighborhoods)
        )?;
        writeln!(
            f,
            "   - All populated places: {}",
            group_thousands(stats.populated_places)
        )?;

        writeln!(f)?;
        writeln!(f, "Completeness:")?;
        let missing = stats.missing_main_regions();
        if missing.is_empty() {
            writeln!(f, "   - All 10 main regions are present")?;
        } else {
            let names: Vec<&str> = missing
                .iter()
                .map(|code| labels::region_name(code).unwrap_or(*code))
                .collect();
            writeln!(f, "   - Missing regions: {}", names.join(", "))?;
        }
        for (label, count, ratio) in [
            ("with coordinates", stats.with_coordinates, stats.coordinates_ratio()),
            ("with a name", stats.with_primary_name, stats.names_ratio()),
            ("with a region", stats.with_region, stats.region_ratio()),
        ] {
            writeln!(
                f,
                "   - Locations {label}: {} / {total} ({:.1}%)",
                group_thousands(count),
                ratio * 100.0
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Cities by region:")?;
        for (code, count) in &stats.cities_by_region {
            writeln!(f, "   - {} ({code}): {count} cities", region_label(code))?;
        }

        writeln!(f)?;
        writeln!(f, "Neighborhoods by region:")?;
        for (code, count) in &stats.neighborhoods_by_region {
            writeln!(
                f,
                "   - {} ({code}): {count} neighborhoods",
                region_label(code)
            )?;
        }
        Ok(())
    }

    fn write_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assessment = self.stats.assess(self.thresholds);

        writeln!(f)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Summary:")?;
        writeln!(
            f,
            "   - Total locations: {}",
            group_thousands(assessment.total_locations)
        )?;
        writeln!(f, "   - Major cities: {}", group_thousands(assessment.cities))?;
        writeln!(
            f,
            "   - Neighborhoods: {}",
            group_thousands(assessment.neighborhoods)
        )?;
        writeln!(
            f,
            "   - Populated places: {}",
            group_thousands(assessment.populated_places)
        )?;
        writeln!(f, "   - Regions covered: {}", assessment.regions)?;
        writeln!(f, "   - Complete: {}", if assessment.is_complete { "yes" } else { "no" })?;

        writeln!(f)?;
        writeln!(f, "Recommendation:")?;
        if assessment.ready {
            writeln!(f, "   The dataset is complete and ready to use.")?;
        } else {
            writeln!(f, "   The dataset needs more data:")?;
        }
        for warning in &assessment.warnings {
            writeln!(f, "      - {warning}")?;
        }
        Ok(())
    }
}

impl fmt::Display for AnalysisReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        self.write_distributions(f)?;
        self.write_coverage(f)?;
        self.write_summary(f)
    }
}

fn region_label(code: &str) -> String {
    labels::region_name(code)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Unknown code: {code}"))
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

/// Formats `n` with `,` between thousands groups.
///
/// ```rust
/// use gazetteer_core::report::group_thousands;
///
/// assert_eq!(group_thousands(24_512), "24,512");
/// assert_eq!(group_thousands(7), "7");
/// ```
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
