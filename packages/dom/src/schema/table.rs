//! Property tables: the permitted children of an element kind.

use super::kind::ElementKind;

/// One permitted child kind and its cardinality bounds.
///
/// `max_occurs == 0` means the count is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyEntry {
    pub child_kind: ElementKind,
    pub min_occurs: u32,
    pub max_occurs: u32,
}

impl PropertyEntry {
    /// Terminating entry of every table.
    pub const SENTINEL: PropertyEntry = PropertyEntry::new(ElementKind::Unknown, 0, 0);

    #[must_use]
    pub const fn new(child_kind: ElementKind, min_occurs: u32, max_occurs: u32) -> Self {
        Self {
            child_kind,
            min_occurs,
            max_occurs,
        }
    }

    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.child_kind.is_unknown()
    }

    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.max_occurs == 0
    }

    /// Whether one more child can be added when `count` are already present.
    #[must_use]
    pub fn admits_another(&self, count: usize) -> bool {
        self.is_unbounded() || count < self.max_occurs as usize
    }

    /// Whether `count` children lie within `[min_occurs, max_occurs]`.
    #[must_use]
    pub fn within_bounds(&self, count: usize) -> bool {
        count >= self.min_occurs as usize
            && (self.is_unbounded() || count <= self.max_occurs as usize)
    }
}

/// Immutable, sentinel-terminated list of [`PropertyEntry`] values.
///
/// Tables are static data shared by every node of the owning kind; copying a
/// `PropertyTable` copies the reference, not the entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyTable {
    entries: &'static [PropertyEntry],
}

impl PropertyTable {
    /// Wrap a static entry list. The list must end with [`PropertyEntry::SENTINEL`].
    #[must_use]
    pub const fn new(entries: &'static [PropertyEntry]) -> Self {
        Self { entries }
    }

    /// Entries including the trailing sentinel.
    #[must_use]
    pub fn raw(&self) -> &'static [PropertyEntry] {
        self.entries
    }

    /// Real entries, stopping at the sentinel.
    pub fn entries(&self) -> impl Iterator<Item = &'static PropertyEntry> {
        self.entries.iter().take_while(|entry| !entry.is_sentinel())
    }

    /// Entry for a child kind. Never matches the sentinel.
    #[must_use]
    pub fn get(&self, child_kind: ElementKind) -> Option<&'static PropertyEntry> {
        if child_kind.is_unknown() {
            return None;
        }
        self.entries().find(|entry| entry.child_kind == child_kind)
    }

    #[must_use]
    pub fn allows(&self, child_kind: ElementKind) -> bool {
        self.get(child_kind).is_some()
    }

    /// Number of real entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether both tables are the same static data, not merely equal.
    #[must_use]
    pub fn ptr_eq(&self, other: &PropertyTable) -> bool {
        std::ptr::eq(self.entries, other.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: PropertyTable = PropertyTable::new(&[
        PropertyEntry::new(ElementKind::DayNames, 0, 2),
        PropertyEntry::new(ElementKind::EraNames, 1, 1),
        PropertyEntry::SENTINEL,
    ]);

    static OPEN: PropertyTable = PropertyTable::new(&[
        PropertyEntry::new(ElementKind::Locale, 0, 0),
        PropertyEntry::SENTINEL,
    ]);

    #[test]
    fn test_entries_stop_at_sentinel() {
        let kinds: Vec<_> = TABLE.entries().map(|e| e.child_kind).collect();
        assert_eq!(kinds, vec![ElementKind::DayNames, ElementKind::EraNames]);
        assert_eq!(TABLE.len(), 2);
        assert_eq!(TABLE.raw().len(), 3);
    }

    #[test]
    fn test_get_never_matches_sentinel() {
        assert!(TABLE.get(ElementKind::Unknown).is_none());
        assert!(!TABLE.allows(ElementKind::Unknown));
        assert_eq!(TABLE.get(ElementKind::EraNames).map(|e| e.min_occurs), Some(1));
        assert!(TABLE.get(ElementKind::Locale).is_none());
    }

    #[test]
    fn test_admits_another() {
        let entry = TABLE.get(ElementKind::DayNames).unwrap();
        assert!(entry.admits_another(0));
        assert!(entry.admits_another(1));
        assert!(!entry.admits_another(2));

        let open = OPEN.get(ElementKind::Locale).unwrap();
        assert!(open.is_unbounded());
        assert!(open.admits_another(10_000));
    }

    #[test]
    fn test_within_bounds() {
        let era = TABLE.get(ElementKind::EraNames).unwrap();
        assert!(!era.within_bounds(0));
        assert!(era.within_bounds(1));
        assert!(!era.within_bounds(2));
    }

    #[test]
    fn test_ptr_eq() {
        let copy = TABLE;
        assert!(copy.ptr_eq(&TABLE));
        assert!(!TABLE.ptr_eq(&OPEN));
    }
}
