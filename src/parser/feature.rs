// Raw Gherkin feature file handling: only the display name is derived here,
// the step lines themselves go through the same matcher as story bodies.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::slug;

static FEATURE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Feature:\s*(.+)").unwrap());

/// Derives a slugged display name for a feature file from its leading
/// `Feature:` line, falling back to the supplied name (typically the file
/// stem) when no such line exists. Returns a non-empty slug for any
/// non-empty fallback that survives normalization.
pub fn feature_name(gherkin: &str, fallback: &str) -> String {
    let title = FEATURE_LINE
        .captures(gherkin)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or(fallback);

    slug(title)
}
