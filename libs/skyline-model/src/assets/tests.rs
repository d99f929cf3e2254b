//! Asset lookup tests.

use super::*;

#[test]
fn bundled_emblem_is_png() {
    let bytes = BundledAssets.read(EMBLEM_IMAGE).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn bundled_font_is_truetype() {
    let bytes = BundledAssets.read(PRIMARY_FONT).unwrap();
    assert_eq!(&bytes[..4], &[0, 1, 0, 0]);
}

#[test]
fn bundled_rejects_unknown_names() {
    let err = BundledAssets.read("other-font.ttf").unwrap_err();
    assert!(matches!(err, ModelError::AssetUnavailable { .. }));
}

#[test]
fn directory_reads_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("fonts")).unwrap();
    fs::write(dir.path().join("fonts").join("a.ttf"), [7u8, 8]).unwrap();

    let assets = DirectoryAssets::new(dir.path());
    assert_eq!(assets.read("fonts/a.ttf").unwrap(), vec![7, 8]);
    assert!(assets.read("b.ttf").is_err());
}

#[test]
fn directory_rejects_escaping_names() {
    let dir = tempfile::tempdir().unwrap();
    let assets = DirectoryAssets::new(dir.path().join("nested"));
    let err = assets.read("../secret").unwrap_err();
    assert!(err.to_string().contains(".."), "{err}");
}

#[test]
fn chain_falls_through_in_order() {
    let low = InMemoryAssets::default().with("a", vec![1u8]).with("b", vec![1u8]);
    let high = InMemoryAssets::default().with("a", vec![2u8]);
    let chain = AssetChain::new().with(low).with(high);

    assert_eq!(chain.len(), 2);
    assert_eq!(chain.read("a").unwrap(), vec![2]);
    assert_eq!(chain.read("b").unwrap(), vec![1]);
}

#[test]
fn chain_reports_every_miss() {
    let chain = AssetChain::bundled().with(InMemoryAssets::default());
    let err = chain.read("missing.ttf").unwrap_err();
    match err {
        ModelError::AssetUnavailable { name, reason } => {
            assert_eq!(name, "missing.ttf");
            assert!(reason.contains("not found"));
            assert!(reason.contains("not bundled"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_chain_fails() {
    assert!(AssetChain::new().read(EMBLEM_IMAGE).is_err());
}
