// Service exports
pub mod apollo;
pub mod enrichment;
pub mod search;

pub use apollo::{ApolloClient, ApolloError, EnrichmentDetail, OrganizationFilters, PeopleFilters};
pub use enrichment::{enrich_company, enrich_prospects, EnrichmentError, BATCH_SIZE};
pub use search::{ProspectSearch, DEFAULT_COMPANY_LIMIT, DEFAULT_CONTACT_PAGE_SIZE};
