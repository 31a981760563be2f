use std::collections::HashMap;
use std::path::Path;

use bstr::{BStr, BString, ByteSlice as _};

use crate::hash::name_hash;

/// Known original paths keyed by their [`name_hash`].
///
/// Paths are stored as the raw bytes listed, with the legacy backslash
/// separators, so Latin-1 names survive untouched. When two lines hash to the
/// same value the later one wins.
#[derive(Debug, Default, Clone)]
pub struct NameCatalog {
    names: HashMap<u32, BString>,
}

impl NameCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a newline delimited name list. Both `\n` and
    /// `\r\n` terminators are accepted and interior empty lines are kept.
    pub fn from_list<B: AsRef<[u8]>>(list: B) -> Self {
        list.as_ref().lines().collect()
    }

    /// Read a name list from disk. Lines need not be valid UTF-8.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, super::Error> {
        let list = std::fs::read(path)?;
        let catalog = Self::from_list(&list);
        tracing::debug!(names = catalog.len(), "loaded name list");
        Ok(catalog)
    }

    pub fn insert<N: Into<BString>>(&mut self, name: N) -> Option<BString> {
        let name = name.into();
        self.names.insert(name_hash(&name), name)
    }

    pub fn get(&self, hash: u32) -> Option<&BStr> {
        self.names.get(&hash).map(|name| BStr::new(name))
    }

    pub fn contains(&self, hash: u32) -> bool {
        self.names.contains_key(&hash)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<N: Into<BString>> FromIterator<N> for NameCatalog {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        let mut catalog = Self::new();
        catalog.extend(iter);
        catalog
    }
}

impl<N: Into<BString>> Extend<N> for NameCatalog {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}
