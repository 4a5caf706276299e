//! End-to-end fetch pipeline tests against a recording in-memory client.
mod utils;

use std::sync::Arc;

use appledoc::{AnalysisOptions, DocFetcher, ToolResponse, TtlCache, derive_key};
use pretty_assertions::assert_eq;
use serde_json::json;
use utils::*;

const PAGE: &str = "https://developer.apple.com/documentation/uikit/uiview";

fn page(path: &str) -> String {
	format!("https://developer.apple.com/documentation/{path}")
}

#[test]
fn untrusted_hosts_never_reach_the_network() {
	let fetcher = DocFetcher::with_client(MockClient::new());
	for url in [
		"https://example.com/documentation/uikit",
		"https://developer.apple.com.attacker.example/documentation/uikit",
		"http://localhost/documentation/uikit",
		"not a url",
	] {
		let response = fetcher.fetch_document(url, AnalysisOptions::all(), 2);
		assert!(response.is_error(), "{url} should be rejected");
		assert!(response.first_text().contains("URL must be from developer.apple.com"));
		assert!(response.first_text().ends_with(url));
	}
	assert_eq!(fetcher.client().call_count(), 0);
}

#[test]
fn cached_responses_are_returned_verbatim() {
	let cache = Arc::new(TtlCache::default());
	let options = AnalysisOptions::REFERENCES;
	let canned = ToolResponse::text("canned");
	cache.set(derive_key(&json_url("uikit/uiview"), options), canned.clone(), None);

	let fetcher = DocFetcher::with_client(MockClient::new()).with_cache(Arc::clone(&cache));
	assert_eq!(fetcher.fetch_document(PAGE, options, 2), canned);
	assert_eq!(fetcher.client().call_count(), 0);
}

#[test]
fn option_sets_are_cached_separately() {
	let client = MockClient::new().with_document(json_url("uikit/uiview"), symbol_record());
	let fetcher = DocFetcher::with_client(client);

	let plain = fetcher.fetch_document(PAGE, AnalysisOptions::empty(), 2);
	let with_related = fetcher.fetch_document(PAGE, AnalysisOptions::RELATED_APIS, 2);
	assert_ne!(plain, with_related);
	assert!(with_related.first_text().contains("## Related APIs"));
	assert!(!plain.first_text().contains("## Related APIs"));
	assert_eq!(fetcher.client().call_count(), 2);

	fetcher.fetch_document(PAGE, AnalysisOptions::RELATED_APIS, 2);
	assert_eq!(fetcher.client().call_count(), 2);

	assert_ne!(
		derive_key(PAGE, AnalysisOptions::RELATED_APIS),
		derive_key(PAGE, AnalysisOptions::RELATED_APIS | AnalysisOptions::REFERENCES)
	);
}

#[test]
fn wrapper_pages_are_followed_once_per_level() {
	let client = MockClient::new()
		.with_document(json_url("a"), wrapper_record("A", "b"))
		.with_document(json_url("b"), wrapper_record("B", "c"))
		.with_document(json_url("c"), wrapper_record("C", "d"))
		.with_document(json_url("d"), wrapper_record("D", "e"));
	let fetcher = DocFetcher::with_client(client);

	let response = fetcher.fetch_document(&page("a"), AnalysisOptions::empty(), 2);
	assert!(!response.is_error());
	assert!(response.first_text().starts_with("# C\n\n"));
	assert!(response.first_text().ends_with(&format!("({})", json_url("c"))));
	assert_eq!(
		fetcher.client().calls(),
		[json_url("a"), json_url("b"), json_url("c")]
	);

	// Every level of the descent is cached under its own key.
	assert_eq!(fetcher.cache().len(), 3);
	let again = fetcher.fetch_document(&page("b"), AnalysisOptions::empty(), 1);
	assert_eq!(again, response);
	assert_eq!(fetcher.client().call_count(), 3);
}

#[test]
fn zero_depth_renders_the_wrapper() {
	let client = MockClient::new()
		.with_document(json_url("a"), wrapper_record("A", "b"))
		.with_document(json_url("b"), wrapper_record("B", "c"));
	let fetcher = DocFetcher::with_client(client);

	let response = fetcher.fetch_document(&page("a"), AnalysisOptions::empty(), 0);
	assert!(response.first_text().starts_with("# A\n\n"));
	assert_eq!(fetcher.client().calls(), [json_url("a")]);
}

#[test]
fn reference_cycles_stop_at_the_depth_bound() {
	let client = MockClient::new()
		.with_document(json_url("a"), wrapper_record("A", "b"))
		.with_document(json_url("b"), wrapper_record("B", "a"));
	let fetcher = DocFetcher::with_client(client);

	let response = fetcher.fetch_document(&page("a"), AnalysisOptions::empty(), 2);
	assert!(!response.is_error());
	assert!(response.first_text().starts_with("# A\n\n"));
	assert_eq!(
		fetcher.client().calls(),
		[json_url("a"), json_url("b"), json_url("a")]
	);
}

#[test]
fn unsafe_reference_paths_are_rendered_in_place() {
	for target in ["/documentation/../../../etc/passwd", "https://evil.example/payload"] {
		let client = MockClient::new().with_document(
			json_url("a"),
			json!({
				"metadata": { "title": "Wrapper" },
				"references": { "evil": { "title": "Evil", "url": target } }
			}),
		);
		let fetcher = DocFetcher::with_client(client);

		let response = fetcher.fetch_document(&page("a"), AnalysisOptions::empty(), 2);
		assert!(!response.is_error(), "{target}");
		assert!(response.first_text().starts_with("# Wrapper\n\n"));
		assert_eq!(fetcher.client().calls(), [json_url("a")]);
	}
}

#[test]
fn references_without_urls_are_skipped_when_following() {
	let client = MockClient::new()
		.with_document(
			json_url("a"),
			json!({
				"references": {
					"unlinked": { "title": "Unlinked" },
					"linked": { "title": "Linked", "url": "/documentation/b" }
				}
			}),
		)
		.with_document(
			json_url("b"),
			json!({ "metadata": { "title": "B" }, "primaryContentSections": [] }),
		);
	let fetcher = DocFetcher::with_client(client);

	let response = fetcher.fetch_document(&page("a"), AnalysisOptions::empty(), 2);
	assert!(response.first_text().starts_with("# B\n\n"));
	assert_eq!(fetcher.client().calls(), [json_url("a"), json_url("b")]);
}

#[test]
fn empty_reference_urls_are_not_followed() {
	let client = MockClient::new().with_document(
		json_url("a"),
		json!({
			"metadata": { "title": "Wrapper" },
			"references": { "x": { "title": "Blank", "url": "" } }
		}),
	);
	let fetcher = DocFetcher::with_client(client);

	let response = fetcher.fetch_document(&page("a"), AnalysisOptions::empty(), 2);
	assert!(!response.is_error());
	assert!(response.first_text().starts_with("# Wrapper\n\n"));
	assert_eq!(fetcher.client().calls(), [json_url("a")]);
}

#[test]
fn sections_without_a_kind_do_not_fail_the_page() {
	let client = MockClient::new().with_document(
		json_url("a"),
		json!({
			"metadata": { "title": "Untagged" },
			"primaryContentSections": [
				{ "content": [] },
				{
					"kind": "content",
					"content": [
						{ "type": "paragraph", "inlineContent": [{ "type": "text", "text": "Still here." }] }
					]
				}
			]
		}),
	);
	let fetcher = DocFetcher::with_client(client);

	let response = fetcher.fetch_document(&page("a"), AnalysisOptions::empty(), 2);
	assert!(!response.is_error(), "{}", response.first_text());
	assert!(response.first_text().starts_with("# Untagged\n\n"));
	assert!(response.first_text().contains("Still here."));
	assert_eq!(fetcher.client().call_count(), 1);
}

#[test]
fn untyped_spans_and_items_are_dropped_from_the_render() {
	let client = MockClient::new().with_document(
		json_url("a"),
		json!({
			"metadata": { "title": "Untyped" },
			"abstract": [{ "text": "hello" }, { "type": "text", "text": "world" }],
			"primaryContentSections": [
				{ "kind": "content", "content": [{ "text": "no type" }] }
			]
		}),
	);
	let fetcher = DocFetcher::with_client(client);

	let response = fetcher.fetch_document(&page("a"), AnalysisOptions::empty(), 2);
	assert!(!response.is_error(), "{}", response.first_text());
	assert!(response.first_text().starts_with("# Untyped\n\n"));
	assert!(response.first_text().contains("world"));
	assert!(!response.first_text().contains("hello"));
}

#[test]
fn null_scalars_decode_as_defaults() {
	let client = MockClient::new().with_document(
		json_url("a"),
		json!({
			"metadata": {
				"title": "Nullable",
				"beta": null,
				"deprecated": null,
				"platforms": [{ "name": null, "introducedAt": "13.0", "beta": null }]
			},
			"primaryContentSections": []
		}),
	);
	let fetcher = DocFetcher::with_client(client);

	let response = fetcher.fetch_document(&page("a"), AnalysisOptions::PLATFORM_ANALYSIS, 2);
	assert!(!response.is_error(), "{}", response.first_text());
	assert!(response.first_text().starts_with("# Nullable\n\n"));
	assert!(!response.first_text().contains("Beta"));
}

#[test]
fn pages_with_content_are_not_followed() {
	let client = MockClient::new().with_document(json_url("uikit/uiview"), symbol_record());
	let fetcher = DocFetcher::with_client(client);

	let response = fetcher.fetch_document(PAGE, AnalysisOptions::empty(), 2);
	assert!(response.first_text().starts_with("# UIView\n\n"));
	assert_eq!(fetcher.client().call_count(), 1);
}

#[test]
fn json_urls_are_fetched_as_given() {
	let url = json_url("uikit/uiview");
	let client = MockClient::new().with_document(url.clone(), symbol_record());
	let fetcher = DocFetcher::with_client(client);

	let response = fetcher.fetch_document(&url, AnalysisOptions::empty(), 2);
	assert!(!response.is_error());
	assert_eq!(fetcher.client().calls(), [url]);
}

#[test]
fn upstream_failures_are_reported_and_not_cached() {
	let fetcher = DocFetcher::with_client(MockClient::new());

	let response = fetcher.fetch_document(PAGE, AnalysisOptions::empty(), 2);
	assert!(response.is_error());
	assert_eq!(
		response.first_text(),
		format!(
			"Error: Failed to get Apple doc content: Documentation not found (404) at {}\n\n\
			 Please try accessing the documentation directly at: {PAGE}",
			json_url("uikit/uiview")
		)
	);
	assert!(fetcher.cache().is_empty());

	fetcher.fetch_document(PAGE, AnalysisOptions::empty(), 2);
	assert_eq!(fetcher.client().call_count(), 2);
}

#[test]
fn error_envelope_serializes_with_flag() {
	let fetcher = DocFetcher::with_client(MockClient::new());
	let response = fetcher.fetch_document("https://example.com/", AnalysisOptions::empty(), 2);
	let value = serde_json::to_value(&response).unwrap();
	assert_eq!(value["isError"], json!(true));
	assert_eq!(value["content"][0]["type"], json!("text"));
}
