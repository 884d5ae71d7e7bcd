use crate::core::criteria::SIZE_BUCKETS;
use crate::core::scoring::FUNDED_STAGES;
use crate::models::apollo::Organization;

/// Funding rounds older than this no longer count as recent.
const RECENT_FUNDING_DAYS: i64 = 720;

/// Employee headcount above which a team counts as scaling.
const SCALING_TEAM_THRESHOLD: u32 = 50;

/// Maps a raw employee count to its canonical size bucket label.
/// Unknown and zero counts map to `None`.
pub fn bucket_for_employee_count(count: Option<u32>) -> Option<String> {
    let count = count? as u64;
    SIZE_BUCKETS
        .iter()
        .find(|bucket| count >= bucket.min && count <= bucket.max)
        .map(|bucket| bucket.label.to_string())
}

/// Derives human-readable growth signals from an Apollo organization.
///
/// `now` is passed in rather than read from the clock so the funding
/// recency cutoff stays deterministic under test.
pub fn extract_growth_signals(
    org: &Organization,
    now: chrono::DateTime<chrono::Utc>,
) -> Vec<String> {
    let mut signals = Vec::new();

    if let Some(funded_at) = org.latest_funding_round_date {
        if (now - funded_at).num_days() <= RECENT_FUNDING_DAYS {
            signals.push("Recent funding (last 24 months)".to_string());
        }
    }

    if let Some(stage) = org.funding_stage.as_deref() {
        if FUNDED_STAGES.contains(&stage) {
            signals.push("Growth stage company".to_string());
        }
    }

    if let Some(jobs) = org.num_current_jobs {
        if jobs > 0 {
            signals.push(format!("{} active job postings", jobs));
        }
    }

    if org.estimated_num_employees.unwrap_or(0) > SCALING_TEAM_THRESHOLD {
        signals.push("Scaling team".to_string());
    }

    if let Some(description) = org.seo_description.as_deref() {
        if description.to_lowercase().contains("hiring") {
            signals.push("Actively hiring".to_string());
        }
    }

    signals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn parse_date(value: &str) -> DateTime<Utc> {
        value.parse().unwrap()
    }

    #[test]
    fn test_bucket_for_employee_count_boundaries() {
        assert_eq!(bucket_for_employee_count(Some(1)).as_deref(), Some("1-10"));
        assert_eq!(bucket_for_employee_count(Some(10)).as_deref(), Some("1-10"));
        assert_eq!(bucket_for_employee_count(Some(11)).as_deref(), Some("11-50"));
        assert_eq!(bucket_for_employee_count(Some(5000)).as_deref(), Some("1001-5000"));
        assert_eq!(bucket_for_employee_count(Some(5001)).as_deref(), Some("5000+"));
        assert_eq!(bucket_for_employee_count(Some(0)), None);
        assert_eq!(bucket_for_employee_count(None), None);
    }

    #[test]
    fn test_recent_funding_signal_respects_cutoff() {
        let now = parse_date("2024-06-01T00:00:00Z");
        let recent = Organization {
            latest_funding_round_date: Some(parse_date("2023-06-01T00:00:00Z")),
            ..Default::default()
        };
        let stale = Organization {
            latest_funding_round_date: Some(parse_date("2021-01-01T00:00:00Z")),
            ..Default::default()
        };

        assert!(extract_growth_signals(&recent, now)
            .contains(&"Recent funding (last 24 months)".to_string()));
        assert!(extract_growth_signals(&stale, now).is_empty());
    }

    #[test]
    fn test_all_signals_fire_together() {
        let now = parse_date("2024-06-01T00:00:00Z");
        let org = Organization {
            latest_funding_round_date: Some(parse_date("2024-01-15T00:00:00Z")),
            funding_stage: Some("Series B".to_string()),
            num_current_jobs: Some(12),
            estimated_num_employees: Some(180),
            seo_description: Some("We are Hiring across all teams".to_string()),
            ..Default::default()
        };

        let signals = extract_growth_signals(&org, now);

        assert_eq!(
            signals,
            vec![
                "Recent funding (last 24 months)",
                "Growth stage company",
                "12 active job postings",
                "Scaling team",
                "Actively hiring",
            ]
        );
    }

    #[test]
    fn test_seed_stage_is_not_a_growth_signal() {
        let now = parse_date("2024-06-01T00:00:00Z");
        let org = Organization {
            funding_stage: Some("Seed".to_string()),
            ..Default::default()
        };

        assert!(extract_growth_signals(&org, now).is_empty());
    }
}
