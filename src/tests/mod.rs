//! Browser-side tests for the board (run with `wasm-pack test --headless`).
//! Pure helpers (models, participants, errors) have host-target unit tests
//! in their own modules.

mod support;

mod api_url_tests;
