//! Integration test: full map → recode → write pipeline against a temp output dir.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;

use sitestash_core::config::StoreConfig;
use sitestash_core::events::{NullSink, TracingSink};
use sitestash_core::recode::{ImageQuality, ImageRecoder, PassthroughRecoder};
use sitestash_core::storage::StoreError;
use sitestash_core::store::SiteStore;
use sitestash_core::url_model::{CrawlRoot, ResourceKind};
use tempfile::tempdir;
use url::Url;

const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00];

/// Replaces every JPEG with a fixed marker body.
struct MarkerRecoder;

impl ImageRecoder for MarkerRecoder {
    fn recode_jpeg(&self, _path: &Path, _data: &[u8], _quality: ImageQuality) -> Option<Vec<u8>> {
        Some(b"recoded-jpeg".to_vec())
    }

    fn recode_png(&self, _path: &Path, _data: &[u8], _quality: ImageQuality) -> Option<Vec<u8>> {
        None
    }
}

fn config(output: &Path, image_quality: u8) -> StoreConfig {
    StoreConfig {
        output_directory: output.to_path_buf(),
        image_quality,
        sync_writes: false,
    }
}

fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

#[test]
fn page_and_external_asset_land_in_expected_places() {
    let out = tempdir().unwrap();
    let root = CrawlRoot::parse("https://example.com/").unwrap();
    let store = SiteStore::new(
        &config(out.path(), 0),
        root,
        Arc::new(PassthroughRecoder),
        Arc::new(TracingSink),
    );

    let page = store
        .save(&url("https://example.com/blog/post"), ResourceKind::Page, b"<html/>".to_vec())
        .unwrap();
    assert_eq!(page, out.path().join("example.com/blog/post.html"));
    assert_eq!(fs::read(&page).unwrap(), b"<html/>");

    let asset = store
        .save(&url("https://cdn.example.net/img.png"), ResourceKind::Asset, vec![1, 2, 3])
        .unwrap();
    assert_eq!(asset, out.path().join("example.com/_cdn.example.net/img.png"));
    assert_eq!(fs::read(&asset).unwrap(), vec![1, 2, 3]);

    let index = store
        .save(&url("https://example.com/"), ResourceKind::Page, b"index".to_vec())
        .unwrap();
    assert_eq!(index, out.path().join("example.com/index.html"));
}

#[test]
fn jpeg_is_recoded_only_when_quality_is_set() {
    let out = tempdir().unwrap();
    let root = CrawlRoot::parse("https://example.com").unwrap();
    let photo = url("https://example.com/photo.jpg");

    let disabled = SiteStore::new(
        &config(out.path(), 0),
        root.clone(),
        Arc::new(MarkerRecoder),
        Arc::new(NullSink),
    );
    let path = disabled.save(&photo, ResourceKind::Asset, JPEG.to_vec()).unwrap();
    assert_eq!(fs::read(&path).unwrap(), JPEG);

    let enabled = SiteStore::new(
        &config(out.path(), 85),
        root,
        Arc::new(MarkerRecoder),
        Arc::new(NullSink),
    );
    let path = enabled.save(&photo, ResourceKind::Asset, JPEG.to_vec()).unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"recoded-jpeg");

    // Extension says jpg, content says text: content wins.
    let fake = url("https://example.com/fake.jpg");
    let path = enabled
        .save(&fake, ResourceKind::Asset, b"not an image".to_vec())
        .unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"not an image");
}

#[test]
fn same_destination_last_writer_wins() {
    let out = tempdir().unwrap();
    let store = SiteStore::new(
        &config(out.path(), 0),
        CrawlRoot::parse("http://example.com").unwrap(),
        Arc::new(PassthroughRecoder),
        Arc::new(NullSink),
    );
    // `/page.php` and `/page` both normalize to `page.html`.
    let a = store
        .save(&url("http://example.com/page.php"), ResourceKind::Page, b"first".to_vec())
        .unwrap();
    let b = store
        .save(&url("http://example.com/page"), ResourceKind::Page, b"second".to_vec())
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(fs::read(&b).unwrap(), b"second");
}

#[test]
fn filesystem_errors_are_surfaced() {
    let out = tempdir().unwrap();
    let store = SiteStore::new(
        &config(out.path(), 0),
        CrawlRoot::parse("http://example.com").unwrap(),
        Arc::new(PassthroughRecoder),
        Arc::new(NullSink),
    );
    fs::create_dir_all(out.path().join("example.com")).unwrap();
    fs::write(out.path().join("example.com/docs"), b"a file, not a dir").unwrap();

    let err = store
        .save(&url("http://example.com/docs/intro"), ResourceKind::Page, b"x".to_vec())
        .unwrap_err();
    assert!(matches!(err, StoreError::CreateDir { .. }));
    assert!(!out.path().join("example.com/docs/intro.html").exists());
}

#[test]
fn concurrent_saves_into_shared_tree() {
    let out = tempdir().unwrap();
    let store = SiteStore::new(
        &config(out.path(), 0),
        CrawlRoot::parse("http://example.com").unwrap(),
        Arc::new(PassthroughRecoder),
        Arc::new(NullSink),
    );

    thread::scope(|scope| {
        for i in 0..16 {
            let store = &store;
            scope.spawn(move || {
                let u = url(&format!("http://example.com/a/b/c/{}/page{}", i % 3, i));
                store
                    .save(&u, ResourceKind::Page, format!("page {i}").into_bytes())
                    .unwrap();
            });
        }
    });

    for i in 0..16 {
        let path = out
            .path()
            .join(format!("example.com/a/b/c/{}/page{}.html", i % 3, i));
        assert_eq!(fs::read_to_string(path).unwrap(), format!("page {i}"));
    }
}
