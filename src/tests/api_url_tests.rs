//! URL construction uses `encodeURIComponent` via js-sys, so these run as
//! wasm tests rather than host-target unit tests.

use wasm_bindgen_test::*;

use crate::network::api_client::{activities_url, signup_url, unregister_url};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn activities_url_is_relative_by_default() {
    assert_eq!(activities_url(""), "/activities");
    assert_eq!(activities_url("/api"), "/api/activities");
}

#[wasm_bindgen_test]
fn signup_url_percent_encodes_name_and_email() {
    assert_eq!(
        signup_url("", "Soccer Team", "alice@example.com"),
        "/activities/Soccer%20Team/signup?email=alice%40example.com"
    );
}

#[wasm_bindgen_test]
fn unregister_url_percent_encodes_reserved_characters() {
    assert_eq!(
        unregister_url("/api", "Arts & Crafts", "a+b@x.com"),
        "/api/activities/Arts%20%26%20Crafts/participants?email=a%2Bb%40x.com"
    );
}
