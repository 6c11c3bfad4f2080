//! Sample storage backends.
//!
//! A store resolves a resource key (the phoneme mnemonic) to the raw bytes of
//! that phoneme's samples.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

/// Default directory holding one raw sample file per phoneme.
pub const DEFAULT_SAMPLE_DIR: &str = "rawSamples";

/// Default extension of sample files.
pub const DEFAULT_EXTENSION: &str = "raw";

/// Source of raw phoneme sample data.
pub trait SampleStore {
    /// Opens a resource for reading.
    fn open(&self, resource: &str) -> io::Result<Box<dyn Read + '_>>;

    /// Reads the full content of a resource.
    fn read(&self, resource: &str) -> io::Result<Vec<u8>> {
        let mut data = Vec::new();
        self.open(resource)?.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Describes where a resource lives, for diagnostics.
    fn locate(&self, resource: &str) -> String {
        resource.to_string()
    }
}

impl<S: SampleStore + ?Sized> SampleStore for &S {
    fn open(&self, resource: &str) -> io::Result<Box<dyn Read + '_>> {
        (**self).open(resource)
    }

    fn locate(&self, resource: &str) -> String {
        (**self).locate(resource)
    }
}

/// Reads `<root>/<resource>.<extension>` files from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryStore {
    root: PathBuf,
    extension: String,
}

impl Default for DirectoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_DIR)
    }
}

impl DirectoryStore {
    /// Creates a store over `root` using the default extension.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Sets the sample file extension (without the leading dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the file path for a resource.
    pub fn path_for(&self, resource: &str) -> PathBuf {
        let mut path = self.root.join(resource);
        if !self.extension.is_empty() {
            path.set_extension(&self.extension);
        }
        path
    }
}

impl SampleStore for DirectoryStore {
    fn open(&self, resource: &str) -> io::Result<Box<dyn Read + '_>> {
        let file = File::open(self.path_for(resource))?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn locate(&self, resource: &str) -> String {
        self.path_for(resource).display().to_string()
    }
}

/// Holds resources in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    resources: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a resource.
    pub fn insert(&mut self, resource: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.resources.insert(resource.into(), data.into());
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with(mut self, resource: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(resource, data);
        self
    }

    /// Number of stored resources.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns true if no resources are stored.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl SampleStore for MemoryStore {
    fn open(&self, resource: &str) -> io::Result<Box<dyn Read + '_>> {
        match self.resources.get(resource) {
            Some(data) => Ok(Box::new(data.as_slice())),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("resource '{}' not in memory store", resource),
            )),
        }
    }

    fn locate(&self, resource: &str) -> String {
        format!("memory:{}", resource)
    }
}
