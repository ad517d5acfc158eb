//! Resolution against a real storage directory.

use std::fs;

use lectern_storage::{
    ProtocolResponse, PublicationStorage, ResolveError, ResourceResolver, StorageRootProvider,
};
use tempfile::TempDir;

fn storage_with_book() -> (TempDir, ResourceResolver<PublicationStorage>) {
    let dir = TempDir::new().unwrap();
    let chapter_dir = dir.path().join("books").join("1");
    fs::create_dir_all(&chapter_dir).unwrap();
    fs::write(chapter_dir.join("chapter1.html"), "<html></html>").unwrap();
    let resolver = ResourceResolver::new(PublicationStorage::new(dir.path()));
    (dir, resolver)
}

#[test]
fn test_resolves_relative_reference_under_root() {
    let (dir, resolver) = storage_with_book();
    let path = resolver.resolve("store://books/1/chapter1.html").unwrap();

    assert_eq!(path, dir.path().join("books/1/chapter1.html"));
    assert!(path.starts_with(resolver.provider().root_path()));
}

#[test]
fn test_parent_segments_are_rejected() {
    let (_dir, resolver) = storage_with_book();

    for url in [
        "store://../../etc/passwd",
        "store://books/../../etc/passwd",
        "store://%2e%2e/%2e%2e/etc/passwd",
        "store://books/1/..",
    ] {
        assert!(
            matches!(resolver.resolve(url), Err(ResolveError::PathTraversal { .. })),
            "{url}"
        );
    }
}

#[test]
fn test_respond_serves_existing_files() {
    let (dir, resolver) = storage_with_book();

    assert_eq!(
        resolver.respond("store://books/1/chapter1.html"),
        ProtocolResponse::File(dir.path().join("books/1/chapter1.html"))
    );
}

#[test]
fn test_respond_never_serves_directories_or_missing_files() {
    let (_dir, resolver) = storage_with_book();

    assert_eq!(resolver.respond("store://books/1"), ProtocolResponse::NotFound);
    assert_eq!(resolver.respond("store://books/2/chapter1.html"), ProtocolResponse::NotFound);
    assert_eq!(resolver.respond("store://../../etc/passwd"), ProtocolResponse::NotFound);
    assert_eq!(resolver.respond("https://example.org/"), ProtocolResponse::NotFound);
}

#[test]
fn test_borrowed_provider() {
    let (dir, _) = storage_with_book();
    let storage = PublicationStorage::new(dir.path());
    let resolver = ResourceResolver::new(&storage);

    assert_eq!(
        resolver.resolve("store:books/1/chapter1.html").unwrap(),
        dir.path().join("books").join("1").join("chapter1.html")
    );
}

#[cfg(unix)]
#[test]
fn test_respond_refuses_symlinks_leaving_the_root() {
    let (dir, resolver) = storage_with_book();
    let outside = TempDir::new().unwrap();
    let secret = outside.path().join("secret.txt");
    fs::write(&secret, "secret").unwrap();
    std::os::unix::fs::symlink(&secret, dir.path().join("books/leak.txt")).unwrap();
    std::os::unix::fs::symlink(
        dir.path().join("books/1/chapter1.html"),
        dir.path().join("books/alias.html"),
    )
    .unwrap();

    assert!(resolver.resolve("store://books/leak.txt").is_ok());
    assert_eq!(resolver.respond("store://books/leak.txt"), ProtocolResponse::NotFound);
    assert_eq!(
        resolver.respond("store://books/alias.html"),
        ProtocolResponse::File(dir.path().join("books/alias.html"))
    );
}
