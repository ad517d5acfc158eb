//! `store://` request resolution.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

use crate::error::{ResolveError, Result};
use crate::root::StorageRootProvider;

/// Scheme served by the resolver, without the trailing colon.
pub const STORE_SCHEME: &str = "store";

/// Answer to a custom-protocol request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolResponse {
    /// Serve this file.
    File(PathBuf),
    NotFound,
}

/// Maps `store://<relative-path>` requests to files under a storage root.
#[derive(Debug, Clone)]
pub struct ResourceResolver<P> {
    provider: P,
}

impl<P: StorageRootProvider> ResourceResolver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolve a request URL to a path under the storage root.
    ///
    /// Query and fragment are ignored. Each segment is percent-decoded on its
    /// own, so an encoded `/` can never introduce a new component. `..`
    /// segments are rejected outright rather than normalized.
    pub fn resolve(&self, request_url: &str) -> Result<PathBuf> {
        let reference = strip_scheme(request_url)?;
        let reference = reference.split(['?', '#']).next().unwrap_or_default();

        let root = self.provider.root_path();
        let mut path = root.to_path_buf();
        let mut components = 0usize;

        for raw in reference.split('/') {
            let segment = decode_segment(raw)?;
            if segment.is_empty() || segment == "." {
                continue;
            }
            if segment == ".." || !is_plain_name(&segment) {
                return Err(ResolveError::PathTraversal { segment });
            }
            path.push(&segment);
            components += 1;
        }

        if components == 0 {
            return Err(ResolveError::EmptyPath);
        }
        if !is_contained(root, &path) {
            return Err(ResolveError::OutsideRoot(path));
        }
        Ok(path)
    }

    /// Produce the response for a request.
    ///
    /// Rejected requests, missing files and directories all come back as
    /// [`ProtocolResponse::NotFound`].
    pub fn respond(&self, request_url: &str) -> ProtocolResponse {
        let path = match self.resolve(request_url) {
            Ok(path) => path,
            Err(error) => {
                tracing::warn!(url = request_url, %error, "Rejected store request");
                return ProtocolResponse::NotFound;
            }
        };
        if !path.is_file() {
            tracing::debug!(url = request_url, path = %path.display(), "Store resource not found");
            return ProtocolResponse::NotFound;
        }

        // Symlinks under the root must not lead out of it
        match canonical_within(self.provider.root_path(), &path) {
            Ok(true) => {
                tracing::debug!(url = request_url, path = %path.display(), "Serving store resource");
                ProtocolResponse::File(path)
            }
            Ok(false) => {
                tracing::warn!(url = request_url, path = %path.display(), "Store resource links outside the storage root");
                ProtocolResponse::NotFound
            }
            Err(error) => {
                tracing::warn!(url = request_url, %error, "Failed to canonicalize store resource");
                ProtocolResponse::NotFound
            }
        }
    }
}

fn strip_scheme(request_url: &str) -> Result<&str> {
    let unsupported = || ResolveError::UnsupportedScheme(request_url.to_string());
    let (scheme, rest) = request_url.split_once(':').ok_or_else(unsupported)?;
    if !scheme.eq_ignore_ascii_case(STORE_SCHEME) {
        return Err(unsupported());
    }
    Ok(rest.strip_prefix("//").unwrap_or(rest))
}

fn decode_segment(raw: &str) -> Result<String> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| ResolveError::InvalidEncoding {
            segment: raw.to_string(),
        })
}

/// A segment that maps to exactly one normal path component on every
/// platform.
fn is_plain_name(segment: &str) -> bool {
    !segment.contains(['/', '\\', ':', '\0'])
}

fn is_contained(root: &Path, path: &Path) -> bool {
    path.starts_with(root) && path != root
}

fn canonical_within(root: &Path, path: &Path) -> std::io::Result<bool> {
    let root = root.canonicalize()?;
    let target = path.canonicalize()?;
    Ok(is_contained(&root, &target))
}
