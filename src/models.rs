use serde::Serialize;

/// Written in place of any scraped field that could not be found.
pub const NOT_AVAILABLE: &str = "Not available";

/// Name and ASIN taken from the product URL path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductIdentity {
    pub name: String,
    pub asin: String,
}

/// Best-effort fields scraped from the product page. `None` means no match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapedFields {
    pub original_price: Option<String>,
    pub discounted_price: Option<String>,
    pub rating: Option<String>,
}

/// One record per input URL, whatever went wrong while extracting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub url: String,
    pub identity: Option<ProductIdentity>,
    pub fields: ScrapedFields,
}

impl ProductRecord {
    pub fn to_row(&self) -> OutputRow<'_> {
        let (name, asin) = match &self.identity {
            Some(identity) => (identity.name.as_str(), identity.asin.as_str()),
            None => ("", ""),
        };

        OutputRow {
            url: &self.url,
            product_name: name,
            asin,
            original_price: or_sentinel(&self.fields.original_price),
            discounted_price: or_sentinel(&self.fields.discounted_price),
            rating: or_sentinel(&self.fields.rating),
        }
    }
}

fn or_sentinel(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_AVAILABLE)
}

/// A row of the output CSV. Field order is column order.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct OutputRow<'a> {
    #[serde(rename = "URL")]
    pub url: &'a str,
    #[serde(rename = "Product Name")]
    pub product_name: &'a str,
    #[serde(rename = "ASIN")]
    pub asin: &'a str,
    #[serde(rename = "Original Price")]
    pub original_price: &'a str,
    #[serde(rename = "Discounted Price")]
    pub discounted_price: &'a str,
    #[serde(rename = "Product Rating")]
    pub rating: &'a str,
}
