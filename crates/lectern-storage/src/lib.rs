//! Publication storage and the `store://` resource scheme.
//!
//! Renderers load publication files through `store://<relative-path>` URLs.
//! [`ResourceResolver`] maps such a URL to a file under the storage root
//! reported by a [`StorageRootProvider`], refusing anything that would
//! leave that root.
//!
//! ```
//! use std::path::Path;
//! use lectern_storage::{PublicationStorage, ResourceResolver};
//!
//! let resolver = ResourceResolver::new(PublicationStorage::new("/data/publications"));
//! let path = resolver.resolve("store://books/1/chapter1.html").unwrap();
//! assert_eq!(path, Path::new("/data/publications/books/1/chapter1.html"));
//! assert!(resolver.resolve("store://../../etc/passwd").is_err());
//! ```

mod error;
mod resolver;
mod root;

pub use error::{ResolveError, Result};
pub use resolver::{ProtocolResponse, ResourceResolver, STORE_SCHEME};
pub use root::{PublicationStorage, StorageRootProvider};
