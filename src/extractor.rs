use tracing::{debug, warn};

use crate::error::ExtractError;
use crate::fetcher::PageSource;
use crate::identity::derive_identity;
use crate::models::{ProductIdentity, ProductRecord, ScrapedFields};
use crate::parser::PageSelectors;

/// How far extraction of a single URL got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Complete,
    /// Identity derived, page could not be fetched.
    Partial,
    /// Identity could not be derived; nothing was fetched.
    Failed,
}

pub struct Extractor<S> {
    source: S,
    selectors: PageSelectors,
}

impl<S: PageSource> Extractor<S> {
    pub fn new(source: S, selectors: PageSelectors) -> Self {
        Self { source, selectors }
    }

    /// Build a record for `url`. Never fails: problems are logged and the
    /// affected fields are left empty.
    pub fn extract(&self, url: &str) -> (ProductRecord, Outcome) {
        let identity = match derive_identity(url) {
            Ok(identity) => identity,
            Err(e) => {
                warn!("{e}");
                return (empty_record(url, None), Outcome::Failed);
            }
        };
        debug!(url, name = %identity.name, asin = %identity.asin, "derived identity");

        match self.fetch_fields(url) {
            Ok(fields) => (
                ProductRecord {
                    url: url.to_string(),
                    identity: Some(identity),
                    fields,
                },
                Outcome::Complete,
            ),
            Err(e) => {
                warn!("{e}");
                (empty_record(url, Some(identity)), Outcome::Partial)
            }
        }
    }

    fn fetch_fields(&self, url: &str) -> Result<ScrapedFields, ExtractError> {
        let html = self.source.fetch_html(url)?;
        Ok(self.selectors.parse_fields(&html))
    }
}

fn empty_record(url: &str, identity: Option<ProductIdentity>) -> ProductRecord {
    ProductRecord {
        url: url.to_string(),
        identity,
        fields: ScrapedFields::default(),
    }
}
