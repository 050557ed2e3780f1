use super::*;

// =============================================================
// Path joining
// =============================================================

#[test]
fn join_path_skips_empty_base() {
    assert_eq!(join_path("", "intro.md"), "intro.md");
}

#[test]
fn join_path_nests_with_slash() {
    assert_eq!(join_path("physics", "entropy.md"), "physics/entropy.md");
    assert_eq!(join_path("physics/thermo", "entropy.md"), "physics/thermo/entropy.md");
}

// =============================================================
// Editor links
// =============================================================

#[test]
fn editor_href_encodes_the_path() {
    assert_eq!(
        editor_href("physics/heat death.md"),
        "/notes/editor?path=physics%2Fheat%20death.md"
    );
}

#[test]
fn editor_href_passes_plain_paths_through() {
    assert_eq!(editor_href("intro.md"), "/notes/editor?path=intro.md");
}
