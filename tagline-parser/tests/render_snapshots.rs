//! Snapshot tests for rendering whole shorthand files
//!
//! Fixtures live in `tests/fixtures`; the expected HTML is kept in
//! `tests/snapshots` and reviewed with `cargo insta review`.

use std::path::PathBuf;
use tagline_parser::DocumentLoader;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn render_fixture(name: &str) -> String {
    DocumentLoader::from_path(fixture_path(name))
        .expect("fixture to load")
        .to_html()
        .expect("fixture to parse")
}

#[test]
fn renders_full_page_with_crlf_endings() {
    let html = render_fixture("page.tl");
    insta::assert_snapshot!("page", html);
}

#[test]
fn renders_nested_list_and_skips_prose() {
    let html = render_fixture("list.tl");
    insta::assert_snapshot!("list", html);
}
