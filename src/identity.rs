use crate::error::ExtractError;
use crate::models::ProductIdentity;

/// Path segment that separates the product name from the ASIN.
pub const MARKER: &str = "dp";

/// Derive the product name and ASIN from a URL of the form
/// `https://host/<hyphenated-name>/dp/<asin>[/...]`.
///
/// Segments are taken from the raw path text: no percent-decoding or
/// encoding, no dot-segment resolution, and the scheme is optional.
/// The marker must have a non-empty segment on both sides. A marker in
/// first position has no name segment and is reported as
/// `MissingProductName`.
pub fn derive_identity(raw_url: &str) -> Result<ProductIdentity, ExtractError> {
    let segments: Vec<&str> = raw_path(raw_url).split('/').collect();

    let marker = segments
        .iter()
        .position(|segment| *segment == MARKER)
        .ok_or_else(|| ExtractError::MissingIdentifierMarker {
            url: raw_url.to_string(),
        })?;

    let asin = segments
        .get(marker + 1)
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| ExtractError::MissingIdentifier {
            url: raw_url.to_string(),
        })?;

    let name = marker
        .checked_sub(1)
        .and_then(|index| segments.get(index))
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| ExtractError::MissingProductName {
            url: raw_url.to_string(),
        })?;

    Ok(ProductIdentity {
        name: name.replace('-', " "),
        asin: asin.to_string(),
    })
}

/// The path part of `raw_url`: query and fragment cut off, then
/// `scheme:` and `//authority` stripped when present.
fn raw_path(raw_url: &str) -> &str {
    let end = raw_url.find(['?', '#']).unwrap_or(raw_url.len());
    let mut rest = &raw_url[..end];

    if let Some((scheme, after)) = rest.split_once(':')
        && is_scheme(scheme)
    {
        rest = after;
    }

    match rest.strip_prefix("//") {
        Some(authority_and_path) => authority_and_path
            .find('/')
            .map_or("", |slash| &authority_and_path[slash..]),
        None => rest,
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_asin_surround_marker() {
        let identity =
            derive_identity("https://www.example.com/wireless-mouse/dp/B000ABC123").unwrap();
        assert_eq!(identity.name, "wireless mouse");
        assert_eq!(identity.asin, "B000ABC123");
    }

    #[test]
    fn trailing_segments_and_query_are_ignored() {
        let identity = derive_identity(
            "https://www.amazon.com/Echo-Dot-3rd-Gen/dp/B07FZ8S74R/ref=sr_1_1?keywords=echo#reviews",
        )
        .unwrap();
        assert_eq!(identity.name, "Echo Dot 3rd Gen");
        assert_eq!(identity.asin, "B07FZ8S74R");
    }

    #[test]
    fn first_marker_wins() {
        let identity = derive_identity("https://www.example.com/a-b/dp/B1/dp/B2").unwrap();
        assert_eq!(identity.name, "a b");
        assert_eq!(identity.asin, "B1");
    }

    #[test]
    fn trailing_slash_after_asin() {
        let identity = derive_identity("https://www.example.com/usb-cable/dp/B0C1/").unwrap();
        assert_eq!(identity.asin, "B0C1");
    }

    #[test]
    fn segments_are_not_percent_decoded() {
        let identity = derive_identity("https://www.example.com/caf%C3%A9-mug/dp/B9").unwrap();
        assert_eq!(identity.name, "caf%C3%A9 mug");
    }

    #[test]
    fn missing_marker() {
        let err = derive_identity("https://www.example.com/wireless-mouse/B000ABC123").unwrap_err();
        assert!(matches!(err, ExtractError::MissingIdentifierMarker { .. }));
    }

    #[test]
    fn marker_must_match_whole_segment() {
        let err = derive_identity("https://www.example.com/mouse/dpx/B1").unwrap_err();
        assert!(matches!(err, ExtractError::MissingIdentifierMarker { .. }));
    }

    #[test]
    fn marker_without_asin() {
        let err = derive_identity("https://www.example.com/wireless-mouse/dp").unwrap_err();
        assert!(matches!(err, ExtractError::MissingIdentifier { .. }));

        let err = derive_identity("https://www.example.com/wireless-mouse/dp/").unwrap_err();
        assert!(matches!(err, ExtractError::MissingIdentifier { .. }));
    }

    #[test]
    fn marker_as_first_segment_has_no_name() {
        let err = derive_identity("https://www.example.com/dp/B000ABC123").unwrap_err();
        assert!(matches!(err, ExtractError::MissingProductName { .. }));
    }

    #[test]
    fn empty_name_segment() {
        let err = derive_identity("https://www.example.com//dp/B000ABC123").unwrap_err();
        assert!(matches!(err, ExtractError::MissingProductName { .. }));
    }

    #[test]
    fn raw_non_ascii_is_kept() {
        let identity = derive_identity("https://www.example.com/café-mug/dp/B9").unwrap();
        assert_eq!(identity.name, "café mug");
    }

    #[test]
    fn raw_spaces_are_kept() {
        let identity =
            derive_identity("https://www.example.com/wireless mouse-pad/dp/B9").unwrap();
        assert_eq!(identity.name, "wireless mouse pad");
    }

    #[test]
    fn dot_segments_are_not_resolved() {
        let identity = derive_identity("https://www.example.com/a/./b/../dp/B9").unwrap();
        assert_eq!(identity.name, "..");
        assert_eq!(identity.asin, "B9");
    }

    #[test]
    fn scheme_is_optional() {
        let identity = derive_identity("www.amazon.com/wireless-mouse/dp/B1").unwrap();
        assert_eq!(identity.name, "wireless mouse");
        assert_eq!(identity.asin, "B1");

        let identity = derive_identity("//www.amazon.com/wireless-mouse/dp/B1").unwrap();
        assert_eq!(identity.name, "wireless mouse");
    }

    #[test]
    fn host_is_never_a_segment() {
        let err = derive_identity("https://dp/B000ABC123").unwrap_err();
        assert!(matches!(err, ExtractError::MissingIdentifierMarker { .. }));
    }

    #[test]
    fn marker_in_query_is_ignored() {
        let err =
            derive_identity("https://www.example.com/search?next=/mouse/dp/B1").unwrap_err();
        assert!(matches!(err, ExtractError::MissingIdentifierMarker { .. }));
    }

    #[test]
    fn relative_path_starting_at_marker() {
        let err = derive_identity("dp/B000ABC123").unwrap_err();
        assert!(matches!(err, ExtractError::MissingProductName { .. }));
    }

    #[test]
    fn empty_input() {
        let err = derive_identity("").unwrap_err();
        assert!(matches!(err, ExtractError::MissingIdentifierMarker { .. }));
    }
}
