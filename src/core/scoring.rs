use crate::models::{CandidateCompany, CandidateContact, Criteria, Prospect, ScoreResult, ScoringWeights};

/// Industries the product is built for.
pub const TARGET_INDUSTRIES: [&str; 10] = [
    "SaaS",
    "Technology",
    "Software",
    "E-commerce",
    "Professional Services",
    "FinTech",
    "EdTech",
    "HealthTech",
    "Marketing",
    "Sales",
];

/// Departments that own the buying decision.
pub const TARGET_DEPARTMENTS: [&str; 8] = [
    "Sales",
    "HR",
    "Human Resources",
    "Operations",
    "Customer Success",
    "Talent",
    "Recruiting",
    "Marketing",
];

/// Funding stages that indicate an actively growing company.
pub const FUNDED_STAGES: [&str; 5] =
    ["Series A", "Series B", "Series C", "Series D", "Growth"];

/// Size buckets in the sweet spot for the product.
const IDEAL_SIZES: [&str; 2] = ["51-200", "201-500"];

/// Size buckets adjacent to the sweet spot.
const GOOD_SIZES: [&str; 2] = ["11-50", "501-1000"];

/// Technologies whose presence suggests budget for B2B tooling.
const RELEVANT_TECHS: [&str; 6] =
    ["Salesforce", "HubSpot", "Intercom", "Zendesk", "AWS", "Slack"];

/// Title fragments that raise a contact's relevance score.
const TITLE_KEYWORDS: [&str; 11] = [
    "head of",
    "chief",
    "vp",
    "vice president",
    "director",
    "sales enablement",
    "talent",
    "recruiting",
    "people ops",
    "revenue",
    "growth",
];

/// Title fragments that qualify a contact for outreach on their own.
const OUTREACH_TITLE_KEYWORDS: [&str; 8] = [
    "head of",
    "chief",
    "vp",
    "director",
    "sales",
    "talent",
    "people",
    "recruiting",
];

/// Seniorities that qualify for outreach when paired with a target
/// department.
const OUTREACH_SENIORITIES: [&str; 4] = ["c_suite", "vp", "director", "senior"];

/// Relevance points per normalized seniority label.
const SENIORITY_SCORES: [(&str, u32); 6] = [
    ("c_suite", 40),
    ("vp", 35),
    ("director", 30),
    ("senior", 20),
    ("manager", 15),
    ("individual_contributor", 5),
];

/// Calculate how closely a company matches the ideal customer profile
/// (0-100).
///
/// Point table:
///   industry        30  (10 for any stated industry)
///   company size    25  (15 adjacent, 5 any)
///   funding stage   20  (10 for Seed)
///   growth signals  15  (5 per signal, capped)
///   technology fit  10  (3 per relevant tech, capped)
pub fn calculate_company_score(company: &CandidateCompany) -> u32 {
    let mut score = 0u32;

    // Industry match (30 points)
    if let Some(industry) = non_empty(&company.industry) {
        if TARGET_INDUSTRIES.contains(&industry) {
            score += 30;
        } else {
            score += 10;
        }
    }

    // Company size (25 points)
    if let Some(size) = non_empty(&company.company_size) {
        if IDEAL_SIZES.contains(&size) {
            score += 25;
        } else if GOOD_SIZES.contains(&size) {
            score += 15;
        } else {
            score += 5;
        }
    }

    // Funding stage (20 points)
    if let Some(stage) = non_empty(&company.funding_stage) {
        if FUNDED_STAGES.contains(&stage) {
            score += 20;
        } else if stage == "Seed" {
            score += 10;
        }
    }

    // Growth signals (15 points, 5 per signal)
    score += (company.growth_signals.len() as u32 * 5).min(15);

    // Technology fit (10 points, 3 per relevant tech)
    let tech_matches = company
        .technologies_used
        .iter()
        .filter(|tech| {
            let tech = tech.to_lowercase();
            RELEVANT_TECHS
                .iter()
                .any(|relevant| tech.contains(&relevant.to_lowercase()))
        })
        .count() as u32;
    score += (tech_matches * 3).min(10);

    score.min(100)
}

/// Calculate how relevant a contact is as a buyer or champion
/// (0-100). The company is not consulted today but stays in the
/// signature so company-aware adjustments do not ripple through
/// callers.
pub fn calculate_contact_relevance(
    contact: &CandidateContact,
    _company: &CandidateCompany,
) -> u32 {
    let mut score = 0u32;

    // Seniority (up to 40 points)
    if let Some(seniority) = normalized_seniority(contact) {
        score += SENIORITY_SCORES
            .iter()
            .find(|(label, _)| *label == seniority)
            .map(|(_, points)| *points)
            .unwrap_or(0);
    }

    // Department (30 points)
    if let Some(department) = non_empty(&contact.department) {
        if TARGET_DEPARTMENTS.contains(&department) {
            score += 30;
        } else {
            score += 10;
        }
    }

    // Title keywords (20 points)
    let title = lowercase_title(contact);
    if TITLE_KEYWORDS.iter().any(|keyword| title.contains(keyword)) {
        score += 20;
    }

    // Verified email (10 points)
    if contact.verified_email() {
        score += 10;
    }

    score.min(100)
}

/// Whether a contact is worth reaching out to at all: either a senior
/// person in a target department, or anyone whose title carries an
/// outreach keyword.
pub fn is_relevant_for_outreach(contact: &CandidateContact) -> bool {
    let seniority = contact
        .seniority
        .as_deref()
        .unwrap_or("")
        .to_lowercase();
    let has_relevant_seniority = OUTREACH_SENIORITIES.contains(&seniority.as_str());

    let has_relevant_department = non_empty(&contact.department)
        .map(|department| TARGET_DEPARTMENTS.contains(&department))
        .unwrap_or(false);

    let title = lowercase_title(contact);
    let has_relevant_title = OUTREACH_TITLE_KEYWORDS
        .iter()
        .any(|keyword| title.contains(keyword));

    (has_relevant_seniority && has_relevant_department) || has_relevant_title
}

/// Score one prospect against search criteria (0-100), with a reason
/// string per matched category.
///
/// Categories whose criteria list is empty are skipped entirely.
/// Exact and partial title matches are mutually exclusive; an exact
/// match suppresses the partial check.
pub fn calculate_prospect_score(
    prospect: &Prospect,
    criteria: &Criteria,
    weights: &ScoringWeights,
) -> ScoreResult {
    let mut score = 0u32;
    let mut reasons = Vec::new();

    let contact = &prospect.contact;
    let company = &prospect.company;

    // Job title: exact beats partial, never both
    let title = lowercase_title(contact);
    if !criteria.job_titles.is_empty() {
        let exact = criteria
            .job_titles
            .iter()
            .any(|criterion| title.contains(&criterion.to_lowercase()));
        if exact {
            score += weights.job_title_exact;
            reasons.push("Exact job title match".to_string());
        } else {
            let partial = criteria.job_titles.iter().any(|criterion| {
                criterion
                    .to_lowercase()
                    .split(' ')
                    .any(|word| !word.is_empty() && title.contains(word))
            });
            if partial {
                score += weights.job_title_partial;
                reasons.push("Partial job title match".to_string());
            }
        }
    }

    // Seniority: exact label match, case-insensitive
    if !criteria.seniorities.is_empty() {
        let seniority = contact.seniority.as_deref().unwrap_or("").to_lowercase();
        if criteria
            .seniorities
            .iter()
            .any(|criterion| criterion.to_lowercase() == seniority)
        {
            score += weights.seniority;
            reasons.push("Seniority level match".to_string());
        }
    }

    // Industry: substring match
    if !criteria.industries.is_empty() {
        let industry = company.industry.as_deref().unwrap_or("").to_lowercase();
        if criteria
            .industries
            .iter()
            .any(|criterion| industry.contains(&criterion.to_lowercase()))
        {
            score += weights.industry;
            reasons.push("Industry match".to_string());
        }
    }

    // Company size: exact bucket label match
    if !criteria.company_sizes.is_empty() {
        let size = company.company_size.as_deref().unwrap_or("");
        if criteria.company_sizes.iter().any(|criterion| criterion == size) {
            score += weights.company_size;
            reasons.push("Company size match".to_string());
        }
    }

    // Location: substring match against the joined location
    if !criteria.locations.is_empty() {
        let location = company.location_string().to_lowercase();
        if criteria
            .locations
            .iter()
            .any(|criterion| location.contains(&criterion.to_lowercase()))
        {
            score += weights.location;
            reasons.push("Location match".to_string());
        }
    }

    // Funding stage: exact label match
    if !criteria.funding_stages.is_empty() {
        let stage = company.funding_stage.as_deref().unwrap_or("");
        if criteria.funding_stages.iter().any(|criterion| criterion == stage) {
            score += weights.funding_stage;
            reasons.push("Funding stage match".to_string());
        }
    }

    // Technologies: substring match against any company technology
    if !criteria.technologies.is_empty() {
        let techs: Vec<String> = company
            .technologies_used
            .iter()
            .map(|tech| tech.to_lowercase())
            .collect();
        if criteria.technologies.iter().any(|criterion| {
            let criterion = criterion.to_lowercase();
            techs.iter().any(|tech| tech.contains(&criterion))
        }) {
            score += weights.technology;
            reasons.push("Technology stack match".to_string());
        }
    }

    ScoreResult {
        score: score.min(100),
        reasons,
    }
}

#[inline]
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[inline]
fn lowercase_title(contact: &CandidateContact) -> String {
    contact.job_title.as_deref().unwrap_or("").to_lowercase()
}

/// Seniority lowered and underscored so "C Suite" and "c_suite" read
/// the same.
#[inline]
fn normalized_seniority(contact: &CandidateContact) -> Option<String> {
    non_empty(&contact.seniority).map(|s| s.to_lowercase().replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_company() -> CandidateCompany {
        CandidateCompany {
            name: Some("Acme Analytics".to_string()),
            industry: Some("SaaS".to_string()),
            company_size: Some("51-200".to_string()),
            funding_stage: Some("Series B".to_string()),
            growth_signals: vec![
                "Recent funding (last 24 months)".to_string(),
                "Scaling team".to_string(),
                "Actively hiring".to_string(),
            ],
            technologies_used: vec!["Salesforce".to_string(), "Notion".to_string()],
            city: Some("Austin".to_string()),
            state: Some("TX".to_string()),
            country: Some("USA".to_string()),
            ..Default::default()
        }
    }

    fn create_test_contact() -> CandidateContact {
        CandidateContact {
            full_name: Some("Jordan Reyes".to_string()),
            job_title: Some("VP of Sales".to_string()),
            seniority: Some("vp".to_string()),
            department: Some("Sales".to_string()),
            email_verified: Some(true),
            ..Default::default()
        }
    }

    #[test]
    fn test_company_score_point_table() {
        // 30 industry + 25 size + 20 stage + 15 signals + 3 tech
        assert_eq!(calculate_company_score(&create_test_company()), 93);
    }

    #[test]
    fn test_company_score_partial_credit() {
        let company = CandidateCompany {
            industry: Some("Logistics".to_string()),
            company_size: Some("1-10".to_string()),
            funding_stage: Some("Seed".to_string()),
            ..Default::default()
        };

        // 10 unlisted industry + 5 any size + 10 seed
        assert_eq!(calculate_company_score(&company), 25);
    }

    #[test]
    fn test_company_score_empty_company_is_zero() {
        assert_eq!(calculate_company_score(&CandidateCompany::default()), 0);
    }

    #[test]
    fn test_company_score_caps_at_100() {
        let mut company = create_test_company();
        company.technologies_used = vec![
            "Salesforce".to_string(),
            "HubSpot".to_string(),
            "Zendesk".to_string(),
            "Slack".to_string(),
        ];

        // 30 + 25 + 20 + 15 + 10 lands exactly on the cap
        assert_eq!(calculate_company_score(&company), 100);
    }

    #[test]
    fn test_contact_relevance_point_table() {
        let company = create_test_company();

        // 35 vp + 30 department + 20 title keyword + 10 verified
        assert_eq!(calculate_contact_relevance(&create_test_contact(), &company), 95);
    }

    #[test]
    fn test_contact_relevance_seniority_labels() {
        let company = create_test_company();
        let mut contact = CandidateContact::default();

        contact.seniority = Some("C Suite".to_string());
        assert_eq!(calculate_contact_relevance(&contact, &company), 40);

        contact.seniority = Some("manager".to_string());
        assert_eq!(calculate_contact_relevance(&contact, &company), 15);

        contact.seniority = Some("astronaut".to_string());
        assert_eq!(calculate_contact_relevance(&contact, &company), 0);
    }

    #[test]
    fn test_contact_relevance_email_status_counts_as_verified() {
        let company = create_test_company();
        let contact = CandidateContact {
            email_status: Some("verified".to_string()),
            ..Default::default()
        };

        assert_eq!(calculate_contact_relevance(&contact, &company), 10);
    }

    #[test]
    fn test_outreach_requires_department_with_seniority() {
        let senior_no_department = CandidateContact {
            seniority: Some("vp".to_string()),
            job_title: Some("Fleet Manager".to_string()),
            ..Default::default()
        };
        assert!(!is_relevant_for_outreach(&senior_no_department));

        let senior_in_target = CandidateContact {
            seniority: Some("vp".to_string()),
            department: Some("Operations".to_string()),
            job_title: Some("Fleet Manager".to_string()),
            ..Default::default()
        };
        assert!(is_relevant_for_outreach(&senior_in_target));
    }

    #[test]
    fn test_outreach_title_keyword_alone_qualifies() {
        let contact = CandidateContact {
            job_title: Some("Head of People".to_string()),
            ..Default::default()
        };

        assert!(is_relevant_for_outreach(&contact));
    }

    #[test]
    fn test_prospect_score_full_match() {
        let prospect = Prospect {
            company: create_test_company(),
            contact: create_test_contact(),
            ..Default::default()
        };
        let criteria = Criteria {
            job_titles: vec!["VP of Sales".to_string()],
            seniorities: vec!["vp".to_string()],
            industries: vec!["SaaS".to_string()],
            company_sizes: vec!["51-200".to_string()],
            locations: vec!["Austin".to_string()],
            funding_stages: vec!["Series B".to_string()],
            technologies: vec!["Salesforce".to_string()],
            ..Default::default()
        };

        let result = calculate_prospect_score(&prospect, &criteria, &ScoringWeights::default());

        assert_eq!(result.score, 100);
        assert_eq!(
            result.reasons,
            vec![
                "Exact job title match",
                "Seniority level match",
                "Industry match",
                "Company size match",
                "Location match",
                "Funding stage match",
                "Technology stack match",
            ]
        );
    }

    #[test]
    fn test_prospect_score_exact_and_partial_are_exclusive() {
        let prospect = Prospect {
            contact: CandidateContact {
                job_title: Some("VP of Sales".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let criteria = Criteria {
            job_titles: vec!["VP of Sales".to_string(), "Head of Sales".to_string()],
            ..Default::default()
        };

        let result = calculate_prospect_score(&prospect, &criteria, &ScoringWeights::default());

        assert_eq!(result.score, 30);
        assert_eq!(result.reasons, vec!["Exact job title match"]);
    }

    #[test]
    fn test_prospect_score_partial_title_match() {
        let prospect = Prospect {
            contact: CandidateContact {
                job_title: Some("Sales Director".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let criteria = Criteria {
            job_titles: vec!["Head of Sales".to_string()],
            ..Default::default()
        };

        let result = calculate_prospect_score(&prospect, &criteria, &ScoringWeights::default());

        assert_eq!(result.score, 15);
        assert_eq!(result.reasons, vec!["Partial job title match"]);
    }

    #[test]
    fn test_prospect_score_skips_empty_categories() {
        let prospect = Prospect {
            company: create_test_company(),
            contact: create_test_contact(),
            ..Default::default()
        };

        let result =
            calculate_prospect_score(&prospect, &Criteria::default(), &ScoringWeights::default());

        assert_eq!(result, ScoreResult::default());
    }

    #[test]
    fn test_prospect_score_respects_custom_weights() {
        let prospect = Prospect {
            contact: CandidateContact {
                job_title: Some("VP of Sales".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let criteria = Criteria {
            job_titles: vec!["vp of sales".to_string()],
            ..Default::default()
        };
        let weights = ScoringWeights {
            job_title_exact: 50,
            ..Default::default()
        };

        let result = calculate_prospect_score(&prospect, &criteria, &weights);

        assert_eq!(result.score, 50);
    }
}
