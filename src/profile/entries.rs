//! Entry collections for the repeatable profile subsections
//!
//! Each subsection (education, courses, languages, achievements, projects)
//! is an ordered collection of entries with locally unique identifiers.
//! Collection operations are pure: they return a new collection and never
//! mutate entries in place, so a reactive view layer can diff snapshots.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// The kinds of repeatable profile subsections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Education history entry
    Education,

    /// Completed course entry
    Course,

    /// Spoken language entry
    Language,

    /// Achievement entry
    Achievement,

    /// Lightweight project entry (distinct from a showcase project)
    Project,
}

impl EntryKind {
    /// The named fields an entry of this kind carries, all string-valued.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            EntryKind::Education => &[
                "institution",
                "degree",
                "field",
                "startYear",
                "endYear",
                "description",
            ],
            EntryKind::Course => &["name", "provider", "duration", "year"],
            EntryKind::Language => &["name", "level"],
            EntryKind::Achievement => &["title", "description", "year"],
            EntryKind::Project => &["title", "description", "technologies", "link"],
        }
    }

    /// Whether the view should scroll a freshly added entry into sight.
    pub(crate) fn reveals_on_add(&self) -> bool {
        matches!(self, EntryKind::Education | EntryKind::Course)
    }
}

/// Locally unique identifier of an entry within its collection.
///
/// Not persisted across sessions; assigned from a monotonic counter at
/// creation time, so two entries created back to back never collide.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntryId(u64);

/// Monotonic source of fresh entry identifiers, shared across the
/// collections of one draft.
#[derive(Debug, Clone, Default)]
pub struct EntryIdGen {
    next: Arc<AtomicU64>,
}

impl EntryIdGen {
    /// Hand out the next identifier.
    pub fn next_id(&self) -> EntryId {
        EntryId(self.next.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

/// One item in a repeatable profile subsection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Identifier unique within the owning collection
    #[serde(default)]
    pub id: EntryId,

    /// Kind-specific named fields
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl Entry {
    /// Read a field value, if present.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// An ordered collection of entries of one kind
#[derive(Debug, Clone, PartialEq)]
pub struct EntryCollection {
    kind: EntryKind,
    entries: Vec<Entry>,
}

impl EntryCollection {
    /// Create an empty collection for the given kind.
    pub fn new(kind: EntryKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    /// Build a collection from server-side records, assigning every entry a
    /// fresh identifier so the local-uniqueness invariant holds regardless
    /// of what the backend stored.
    pub(crate) fn from_records(kind: EntryKind, records: &[Entry], ids: &EntryIdGen) -> Self {
        let entries = records
            .iter()
            .map(|record| Entry {
                id: ids.next_id(),
                fields: record.fields.clone(),
            })
            .collect();
        Self { kind, entries }
    }

    /// The kind of entries this collection holds.
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Number of entries in the collection.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Look up an entry by identifier.
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Append a new entry with empty-valued fields and a fresh identifier.
    ///
    /// Returns the updated collection and the new entry's identifier.
    pub fn add(&self, ids: &EntryIdGen) -> (Self, EntryId) {
        let id = ids.next_id();
        let fields = self
            .kind
            .fields()
            .iter()
            .map(|name| (name.to_string(), String::new()))
            .collect();

        let mut entries = self.entries.clone();
        entries.push(Entry { id, fields });

        (
            Self {
                kind: self.kind,
                entries,
            },
            id,
        )
    }

    /// Filter out the entry with the given identifier. A no-op, not an
    /// error, when no entry matches.
    pub fn remove(&self, id: EntryId) -> Self {
        Self {
            kind: self.kind,
            entries: self
                .entries
                .iter()
                .filter(|entry| entry.id != id)
                .cloned()
                .collect(),
        }
    }

    /// Replace one field of the entry with the given identifier. Entries
    /// without a match are unchanged; an absent identifier makes the whole
    /// operation a no-op.
    pub fn update(&self, id: EntryId, field: &str, value: &str) -> Self {
        Self {
            kind: self.kind,
            entries: self
                .entries
                .iter()
                .map(|entry| {
                    if entry.id == id {
                        let mut fields = entry.fields.clone();
                        fields.insert(field.to_string(), value.to_string());
                        Entry { id: entry.id, fields }
                    } else {
                        entry.clone()
                    }
                })
                .collect(),
        }
    }
}

impl Serialize for EntryCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}
