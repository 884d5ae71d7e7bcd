use std::collections::HashSet;

use crate::models::Criteria;

/// Seniority labels the rest of the pipeline understands.
pub const VALID_SENIORITIES: [&str; 6] =
    ["c_suite", "vp", "director", "manager", "senior", "entry"];

/// Funding stage labels the rest of the pipeline understands.
pub const VALID_FUNDING_STAGES: [&str; 8] = [
    "Seed",
    "Series A",
    "Series B",
    "Series C",
    "Series D",
    "Growth",
    "Public",
    "Acquired",
];

/// Canonical company size bucket with its employee count bounds.
#[derive(Debug, Clone, Copy)]
pub struct SizeBucket {
    pub label: &'static str,
    pub min: u64,
    pub max: u64,
}

/// Canonical size buckets in ascending order. The bounds are
/// contiguous and non-overlapping; the last bucket is open-ended.
pub const SIZE_BUCKETS: [SizeBucket; 7] = [
    SizeBucket { label: "1-10", min: 1, max: 10 },
    SizeBucket { label: "11-50", min: 11, max: 50 },
    SizeBucket { label: "51-200", min: 51, max: 200 },
    SizeBucket { label: "201-500", min: 201, max: 500 },
    SizeBucket { label: "501-1000", min: 501, max: 1000 },
    SizeBucket { label: "1001-5000", min: 1001, max: 5000 },
    SizeBucket { label: "5000+", min: 5001, max: u64::MAX },
];

/// Trims every value, drops empties and deduplicates while keeping
/// the first occurrence of each value.
pub fn clean_values(values: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .filter(|value| seen.insert(value.to_string()))
        .map(|value| value.to_string())
        .collect()
}

/// Maps free-form size strings onto the canonical bucket labels.
///
/// Accepts canonical labels as-is, closed ranges like "50-60" (mapped
/// to the bucket with the largest overlap) and open ranges like
/// "200+" (mapped to the bucket containing the lower bound). Values
/// that match none of these are dropped without error.
pub fn normalize_company_sizes(values: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    clean_values(values)
        .iter()
        .filter_map(|value| normalize_size(value))
        .filter(|label| seen.insert(*label))
        .map(|label| label.to_string())
        .collect()
}

fn normalize_size(value: &str) -> Option<&'static str> {
    if let Some(bucket) = SIZE_BUCKETS.iter().find(|b| b.label == value) {
        return Some(bucket.label);
    }
    if let Some((min, max)) = parse_range(value) {
        return best_overlap_bucket(min, max);
    }
    if let Some(min) = parse_open_range(value) {
        let bucket = SIZE_BUCKETS
            .iter()
            .find(|b| min >= b.min && min <= b.max)
            .map(|b| b.label)
            .unwrap_or("5000+");
        return Some(bucket);
    }
    None
}

/// Parses a closed range like "50-60" or " 50 - 60 ".
fn parse_range(value: &str) -> Option<(u64, u64)> {
    let (left, right) = value.split_once('-')?;
    Some((parse_count(left)?, parse_count(right)?))
}

/// Parses an open range like "200+".
fn parse_open_range(value: &str) -> Option<u64> {
    parse_count(value.trim().strip_suffix('+')?)
}

/// Parses a plain decimal count. Signs, separators and anything else
/// non-numeric disqualify the value.
fn parse_count(value: &str) -> Option<u64> {
    let digits = value.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Picks the bucket with the largest overlap against [min, max].
/// Earlier buckets win ties; zero overlap everywhere drops the value.
fn best_overlap_bucket(min: u64, max: u64) -> Option<&'static str> {
    let mut best: Option<&'static str> = None;
    let mut best_overlap = 0u64;
    for bucket in &SIZE_BUCKETS {
        let lo = bucket.min.max(min);
        let hi = bucket.max.min(max);
        let overlap = if hi >= lo { hi - lo + 1 } else { 0 };
        if overlap > best_overlap {
            best_overlap = overlap;
            best = Some(bucket.label);
        }
    }
    best
}

/// Normalizes every category of raw criteria: values are cleaned,
/// sizes are mapped to canonical buckets, and seniorities or funding
/// stages outside the known labels are silently dropped.
///
/// The operation is idempotent; running it on its own output is a
/// no-op.
pub fn validate_criteria(criteria: &Criteria) -> Criteria {
    Criteria {
        industries: clean_values(&criteria.industries),
        job_titles: clean_values(&criteria.job_titles),
        seniorities: clean_values(&criteria.seniorities)
            .into_iter()
            .filter(|value| VALID_SENIORITIES.contains(&value.as_str()))
            .collect(),
        departments: clean_values(&criteria.departments),
        company_sizes: normalize_company_sizes(&criteria.company_sizes),
        locations: clean_values(&criteria.locations),
        funding_stages: clean_values(&criteria.funding_stages)
            .into_iter()
            .filter(|value| VALID_FUNDING_STAGES.contains(&value.as_str()))
            .collect(),
        technologies: clean_values(&criteria.technologies),
        keywords: clean_values(&criteria.keywords),
    }
}
