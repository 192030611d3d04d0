#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub source: String,
    pub translation: String,
}

impl Entry {
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            translation: translation.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.source.is_empty() && !self.translation.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub skipped_metadata: usize,
    pub incomplete: usize,
    pub dropped_empty: usize,
}

/// Entries in order of appearance. Duplicate sources are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub entries: Vec<Entry>,
    pub stats: ParseStats,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, Entry};

    #[test]
    fn complete_requires_both_sides() {
        assert!(Entry::new("Hello", "Bonjour").is_complete());
        assert!(!Entry::new("", "Bonjour").is_complete());
        assert!(!Entry::new("Hello", "").is_complete());
    }

    #[test]
    fn empty_catalog_has_no_entries() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert_eq!(catalog.stats.incomplete, 0);
    }
}
