use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractError;
use crate::models::ScrapedFields;

pub const ORIGINAL_PRICE_SELECTOR: &str = "span#priceblock_ourprice";
pub const DISCOUNTED_PRICE_SELECTOR: &str = "span.priceBlockDealPriceString";
pub const RATING_SELECTOR: &str = "span.a-icon-alt";

/// Selectors for the scraped fields, compiled once per run.
#[derive(Debug)]
pub struct PageSelectors {
    original_price: Selector,
    discounted_price: Selector,
    rating: Selector,
}

impl PageSelectors {
    pub fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            original_price: compile(ORIGINAL_PRICE_SELECTOR)?,
            discounted_price: compile(DISCOUNTED_PRICE_SELECTOR)?,
            rating: compile(RATING_SELECTOR)?,
        })
    }

    /// Look up each field independently. A field with no match is `None`;
    /// a match with only whitespace is `Some("")`.
    pub fn parse_fields(&self, html: &str) -> ScrapedFields {
        let doc = Html::parse_document(html);

        ScrapedFields {
            original_price: first_text(&doc, &self.original_price),
            discounted_price: first_text(&doc, &self.discounted_price),
            rating: first_text(&doc, &self.rating),
        }
    }
}

fn compile(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

fn first_text(doc: &Html, selector: &Selector) -> Option<String> {
    doc.select(selector).next().map(element_text)
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
