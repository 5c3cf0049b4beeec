//! Typed paths into a resource directory.
use std::path::{Component, Path, PathBuf};

/// Locates the manifest and the files it references under one base directory.
#[derive(Debug, Clone)]
pub struct ResourcePaths {
    root: PathBuf,
    manifest_name: PathBuf,
}

impl ResourcePaths {
    pub fn new(root: PathBuf, manifest_name: PathBuf) -> Self {
        Self {
            root,
            manifest_name,
        }
    }

    /// Return the base directory referenced filenames are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Return the `<root>/<manifest>` path.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.manifest_name)
    }

    /// Join a referenced filename under the base directory.
    ///
    /// Absolute names replace the root entirely, as `Path::join` does.
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

/// Whether a referenced filename can resolve outside the base directory.
pub fn escapes_root(name: &str) -> bool {
    Path::new(name).components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    })
}
