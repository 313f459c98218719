//! Utility helpers shared across integration tests.
#![allow(dead_code, unused_macros)]

use utmlink::{FormState, LinkFamily};

/// Build a `Vec<String>` from a list of string slices.
macro_rules! lines_vec {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*]
    };
}

/// Start a form with `family` and `destination` already selected.
///
/// # Panics
/// Panics if the destination is not offered by the family.
pub fn form_at(family: LinkFamily, destination: &str) -> FormState {
    let mut form = FormState::new();
    form.select_link_family(family);
    form.select_destination(destination)
        .expect("destination should belong to the family");
    form
}

/// Run the `utmlink` binary and capture its output.
pub fn run_cli_with_args(args: &[&str]) -> std::process::Output {
    assert_cmd::Command::cargo_bin("utmlink")
        .expect("failed to create cargo command for utmlink")
        .args(args)
        .env_remove("UTMLINK_FORMAT")
        .output()
        .expect("failed to run utmlink")
}

/// Assert that a URL's query begins with `~campaign=<tag>`.
pub fn assert_campaign_first(url: &str, base: &str, tag: &str) {
    let prefix = format!("{base}?~campaign={tag}");
    assert!(url.starts_with(&prefix), "{url} does not start with {prefix}");
}
