use scraper::{Html, Selector};

/// CSS selector matching every element that can carry a link target
const HREF_SELECTOR: &str = "a[href], link[href]";

/// Extract raw href attribute values from an HTML document, in document
/// order. Elements without an href and empty href values are skipped; no
/// resolution or validation happens here.
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    // The selector is a constant, so a parse failure is a programmer error
    let selector = Selector::parse(HREF_SELECTOR).unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect()
}
