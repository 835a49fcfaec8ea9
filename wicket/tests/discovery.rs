//! Inventory-based extension discovery tests.

#![cfg(feature = "inventory")]

use wicket::{
    Extension, Outcome, PageBinding, PageRequest, PathRouter, Router,
    discover::{DiscoveredExtensions, ExtensionRegistration},
};

struct BuiltinPages;

impl Extension for BuiltinPages {
    fn name(&self) -> &str {
        "builtin"
    }

    fn pages(&self) -> Vec<(String, PageBinding)> {
        vec![(
            "builtin/home".to_string(),
            PageBinding::owned(|_request: PageRequest| async { "builtin home" }),
        )]
    }
}

static BUILTIN: BuiltinPages = BuiltinPages;

wicket::inventory::submit! {
    ExtensionRegistration { extension: &BUILTIN }
}

#[tokio::test]
async fn test_discovered_extension_serves_pages() {
    assert!(DiscoveredExtensions::extension_count() >= 1);

    let router = PathRouter::new(DiscoveredExtensions::new());

    let outcome = router
        .dispatch(&PageRequest::new("builtin/home"))
        .await
        .unwrap();
    assert_eq!(outcome.into_response().unwrap().body(), "builtin home");

    let outcome = router
        .dispatch(&PageRequest::new("builtin/missing"))
        .await
        .unwrap();
    assert_eq!(outcome, Outcome::NotFound);
}
