#[test]
fn version_matches_the_crate_manifest() {
    assert_eq!(selkie::VERSION, env!("CARGO_PKG_VERSION"));
}
