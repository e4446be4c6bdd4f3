use crate::config::SiteSelectors;
use crate::parsers::ListingParser;
use crate::testing::{BASE, job, results_page, url};
use url::Url;

fn parser() -> ListingParser {
    ListingParser::new(&SiteSelectors::default(), Url::parse(BASE).unwrap()).unwrap()
}

#[test]
fn test_extracts_listings_in_order() {
    let html = results_page(
        &[
            job(Some("18/10/2026"), Some("Rust Engineer"), "/JobAds/1"),
            job(Some("17/10/2026"), Some("  Data Analyst "), "/JobAds/2"),
        ],
        None,
    );
    let page = parser().parse_page(&html);

    assert_eq!(page.listings.len(), 2);
    assert_eq!(page.listings[0].title, "Rust Engineer");
    assert_eq!(page.listings[0].posted_date, "18/10/2026");
    assert_eq!(page.listings[0].detail_url, url("/JobAds/1"));
    assert_eq!(page.listings[1].title, "Data Analyst");
    assert_eq!(page.next_page_url, None);
}

#[test]
fn test_incomplete_listings_are_dropped() {
    let html = results_page(
        &[
            job(Some("18/10/2026"), Some("Complete"), "/JobAds/1"),
            job(None, Some("No date"), "/JobAds/2"),
            job(Some("16/10/2026"), None, "/JobAds/3"),
            job(Some("   "), Some("Blank date"), "/JobAds/4"),
            job(Some("15/10/2026"), Some(""), "/JobAds/5"),
        ],
        None,
    );
    let page = parser().parse_page(&html);

    assert_eq!(page.listings.len(), 1);
    assert_eq!(page.listings[0].title, "Complete");
    assert_eq!(page.dropped, 4);
}

#[test]
fn test_listing_without_href_is_dropped() {
    let html = r#"<div class="jobitem"><span class="datemob">1/1</span><h3 class="title"><a>Nowhere</a></h3></div>"#;
    let page = parser().parse_page(html);
    assert!(page.listings.is_empty());
    assert_eq!(page.dropped, 1);
}

#[test]
fn test_next_page_resolved_against_base() {
    let html = results_page(
        &[job(Some("18/10/2026"), Some("Rust Engineer"), "/JobAds/1")],
        Some("/JobAds/Pliroforiki/Attiki/GR/Theseis_Ergasias?page=2"),
    );
    let page = parser().parse_page(&html);
    assert_eq!(
        page.next_page_url,
        Some(url("/JobAds/Pliroforiki/Attiki/GR/Theseis_Ergasias?page=2"))
    );
}

#[test]
fn test_next_page_without_href_means_last_page() {
    let html = r#"<html><body><a class="gtnext">Next</a></body></html>"#;
    assert_eq!(parser().parse_page(html).next_page_url, None);
}

#[test]
fn test_parsing_is_pure() {
    let html = results_page(
        &[
            job(Some("18/10/2026"), Some("A"), "/a"),
            job(None, Some("B"), "/b"),
        ],
        Some("/next"),
    );
    let parser = parser();
    assert_eq!(parser.parse_page(&html), parser.parse_page(&html));
}

#[test]
fn test_page_without_listings() {
    let page = parser().parse_page("<html><body><p>No results</p></body></html>");
    assert!(page.listings.is_empty());
    assert_eq!(page.dropped, 0);
    assert_eq!(page.next_page_url, None);
}

#[test]
fn test_invalid_selector_is_reported() {
    let selectors = SiteSelectors {
        listing: "div..broken".to_string(),
        ..SiteSelectors::default()
    };
    let err = ListingParser::new(&selectors, Url::parse(BASE).unwrap()).unwrap_err();
    assert!(err.to_string().contains("div..broken"));
}
