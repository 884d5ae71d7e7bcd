use thiserror::Error;

use crate::core::scoring::{
    calculate_company_score, calculate_contact_relevance, is_relevant_for_outreach,
};
use crate::models::apollo::Person;
use crate::models::responses::{CompanyEnrichmentResponse, EnrichedContact};
use crate::models::{CandidateCompany, CandidateContact, Prospect};
use crate::services::apollo::{ApolloClient, ApolloError, EnrichmentDetail};

/// Prospects sent to Apollo per bulk match call.
pub const BATCH_SIZE: usize = 10;

/// Contacts fetched per company during a full company enrichment.
const CONTACT_SEARCH_PAGE_SIZE: u32 = 50;

/// Errors that can occur during company enrichment
#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("Apollo request failed: {0}")]
    Apollo(#[from] ApolloError),

    #[error("No company record found for domain: {0}")]
    CompanyNotFound(String),
}

/// Reveal emails and phone numbers for ranked prospects, in batches.
///
/// A failed batch is logged and its prospects pass through
/// unenriched; one bad batch never sinks the whole list. Order is
/// preserved throughout.
pub async fn enrich_prospects(
    client: &ApolloClient,
    mut prospects: Vec<Prospect>,
) -> Vec<Prospect> {
    if prospects.is_empty() {
        return prospects;
    }

    let total_batches = (prospects.len() + BATCH_SIZE - 1) / BATCH_SIZE;

    for (batch_index, start) in (0..prospects.len()).step_by(BATCH_SIZE).enumerate() {
        let end = (start + BATCH_SIZE).min(prospects.len());
        let details: Vec<EnrichmentDetail> =
            prospects[start..end].iter().map(detail_for).collect();

        tracing::info!(
            "Enriching batch {}/{} ({} contacts)",
            batch_index + 1,
            total_batches,
            details.len()
        );

        match client.bulk_enrich_people(&details).await {
            Ok(matches) => {
                for (offset, prospect) in prospects[start..end].iter_mut().enumerate() {
                    if let Some(person) =
                        matches.get(offset).and_then(|m| m.person.as_ref())
                    {
                        merge_enrichment(&mut prospect.contact, person);
                    }
                }
            }
            Err(error) => {
                tracing::warn!("Batch enrichment failed: {}", error);
            }
        }
    }

    prospects
}

/// Enrich one company by domain: firmographics, ideal customer score
/// and a relevance-scored contact list.
pub async fn enrich_company(
    client: &ApolloClient,
    domain: &str,
) -> Result<CompanyEnrichmentResponse, EnrichmentError> {
    tracing::info!("Starting enrichment for company: {}", domain);

    let org = client
        .enrich_organization(domain)
        .await?
        .ok_or_else(|| EnrichmentError::CompanyNotFound(domain.to_string()))?;

    let company = CandidateCompany::from_organization(&org, chrono::Utc::now());
    let ideal_customer_score = calculate_company_score(&company);

    let people = client
        .contacts_by_company(domain, CONTACT_SEARCH_PAGE_SIZE)
        .await?;

    let contacts: Vec<EnrichedContact> = people
        .iter()
        .map(|person| {
            let contact = CandidateContact::from_person(person);
            let relevance_score = calculate_contact_relevance(&contact, &company);
            let relevant_for_outreach = is_relevant_for_outreach(&contact);
            EnrichedContact {
                contact,
                relevance_score,
                relevant_for_outreach,
            }
        })
        .collect();

    let relevant_contacts = contacts.iter().filter(|c| c.relevant_for_outreach).count();

    tracing::info!(
        "Found {} contacts for {} ({} relevant)",
        contacts.len(),
        domain,
        relevant_contacts
    );

    Ok(CompanyEnrichmentResponse {
        company,
        ideal_customer_score,
        total_contacts: contacts.len(),
        relevant_contacts,
        contacts,
    })
}

fn detail_for(prospect: &Prospect) -> EnrichmentDetail {
    EnrichmentDetail {
        first_name: prospect.contact.first_name.clone(),
        last_name: prospect.contact.last_name.clone(),
        organization_name: prospect.company.name.clone(),
        domain: prospect.company.domain.clone(),
    }
}

/// Copy revealed fields onto the contact. Empty revelations keep the
/// existing values; the verified flag always reflects the fresh
/// match.
fn merge_enrichment(contact: &mut CandidateContact, person: &Person) {
    if let Some(email) = person.email.as_deref().filter(|e| !e.is_empty()) {
        contact.email = Some(email.to_string());
    }
    if let Some(phone) = person.primary_phone().filter(|p| !p.is_empty()) {
        contact.phone = Some(phone);
    }
    contact.email_verified = Some(person.email_status.as_deref() == Some("verified"));
    if !person.personal_emails.is_empty() {
        contact.personal_emails = person.personal_emails.clone();
    }
}
