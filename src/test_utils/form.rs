use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

/// Assert that `element` sends its htmx request to `endpoint` via `attribute`,
/// e.g. "hx-post" or "hx-delete".
#[track_caller]
pub(crate) fn assert_hx_endpoint(element: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let hx_url = element
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        hx_url, endpoint,
        "want element with attribute {attribute}=\"{endpoint}\", got {hx_url:?}"
    );
}
