//! The editable profile draft
//!
//! A [`ProfileDraft`] is the in-progress copy of the profile being edited,
//! separate from the last-saved record in the session store. It is built
//! from a [`UserRecord`] at edit start, mutated through field setters and
//! the collection/skill operations, and serialized whole as the body of a
//! profile save.

use serde::Serialize;

use crate::profile::entries::{EntryCollection, EntryId, EntryIdGen, EntryKind};
use crate::profile::skills::{self, Proficiency, Skill};
use crate::session::UserRecord;

/// Number of primary scalar fields that feed the completion estimate.
const COMPLETION_FIELDS: usize = 7;

/// The in-progress, unsaved copy of profile data being edited
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Free-form biography
    pub bio: String,

    /// Phone number
    pub phone: String,

    /// University name
    pub university: String,

    /// Course of study
    pub course: String,

    /// Year of study
    pub year: String,

    /// Account role
    pub role: String,

    /// Company name
    pub company_name: String,

    /// Skills, normalized to the rated form on initialization
    pub skills: Vec<Skill>,

    /// Education history
    pub education: EntryCollection,

    /// Completed courses
    pub courses: EntryCollection,

    /// Spoken languages
    pub languages: EntryCollection,

    /// Achievements
    pub achievements: EntryCollection,

    /// Lightweight projects
    pub projects: EntryCollection,

    #[serde(skip)]
    ids: EntryIdGen,

    #[serde(skip)]
    pending_reveal: Option<(EntryKind, EntryId)>,
}

impl ProfileDraft {
    /// Build a draft from the last-known-good user record, defaulting
    /// missing scalars to the empty string and missing collections to
    /// empty sequences.
    ///
    /// Rebuilding from a newer record fully replaces the draft and discards
    /// unsaved edits; the server copy wins.
    pub fn from_user(user: &UserRecord) -> Self {
        let ids = EntryIdGen::default();

        let education = EntryCollection::from_records(EntryKind::Education, &user.education, &ids);
        let courses = EntryCollection::from_records(EntryKind::Course, &user.courses, &ids);
        let languages = EntryCollection::from_records(EntryKind::Language, &user.languages, &ids);
        let achievements =
            EntryCollection::from_records(EntryKind::Achievement, &user.achievements, &ids);
        let projects = EntryCollection::from_records(EntryKind::Project, &user.projects, &ids);

        Self {
            name: user.name.clone().unwrap_or_default(),
            email: user.email.clone().unwrap_or_default(),
            bio: user.bio.clone().unwrap_or_default(),
            phone: user.phone.clone().unwrap_or_default(),
            university: user.university.clone().unwrap_or_default(),
            course: user.course.clone().unwrap_or_default(),
            year: user.year.clone().unwrap_or_default(),
            role: user.role.clone().unwrap_or_default(),
            company_name: user.company_name.clone().unwrap_or_default(),
            skills: skills::normalize_all(&user.skills),
            education,
            courses,
            languages,
            achievements,
            projects,
            ids,
            pending_reveal: None,
        }
    }

    /// Set the display name.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    /// Set the contact email.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Set the biography.
    pub fn set_bio(&mut self, value: impl Into<String>) {
        self.bio = value.into();
    }

    /// Set the phone number.
    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.phone = value.into();
    }

    /// Set the university name.
    pub fn set_university(&mut self, value: impl Into<String>) {
        self.university = value.into();
    }

    /// Set the course of study.
    pub fn set_course(&mut self, value: impl Into<String>) {
        self.course = value.into();
    }

    /// Set the year of study.
    pub fn set_year(&mut self, value: impl Into<String>) {
        self.year = value.into();
    }

    /// Set the account role.
    pub fn set_role(&mut self, value: impl Into<String>) {
        self.role = value.into();
    }

    /// Set the company name.
    pub fn set_company_name(&mut self, value: impl Into<String>) {
        self.company_name = value.into();
    }

    /// The entry collection of the given kind.
    pub fn collection(&self, kind: EntryKind) -> &EntryCollection {
        match kind {
            EntryKind::Education => &self.education,
            EntryKind::Course => &self.courses,
            EntryKind::Language => &self.languages,
            EntryKind::Achievement => &self.achievements,
            EntryKind::Project => &self.projects,
        }
    }

    fn collection_mut(&mut self, kind: EntryKind) -> &mut EntryCollection {
        match kind {
            EntryKind::Education => &mut self.education,
            EntryKind::Course => &mut self.courses,
            EntryKind::Language => &mut self.languages,
            EntryKind::Achievement => &mut self.achievements,
            EntryKind::Project => &mut self.projects,
        }
    }

    /// Append an empty entry to the collection of the given kind and
    /// return its identifier. Education and course adds also queue a
    /// reveal request for the view (see [`take_pending_reveal`]).
    ///
    /// [`take_pending_reveal`]: ProfileDraft::take_pending_reveal
    pub fn add_entry(&mut self, kind: EntryKind) -> EntryId {
        let ids = self.ids.clone();
        let collection = self.collection_mut(kind);
        let (updated, id) = collection.add(&ids);
        *collection = updated;

        if kind.reveals_on_add() {
            self.pending_reveal = Some((kind, id));
        }
        id
    }

    /// Remove the entry with the given identifier from the collection of
    /// the given kind. A no-op when absent.
    pub fn remove_entry(&mut self, kind: EntryKind, id: EntryId) {
        let collection = self.collection_mut(kind);
        *collection = collection.remove(id);
    }

    /// Replace one field of an entry. A no-op when the identifier is not
    /// present in the collection.
    pub fn update_entry(&mut self, kind: EntryKind, id: EntryId, field: &str, value: &str) {
        let collection = self.collection_mut(kind);
        *collection = collection.update(id, field, value);
    }

    /// The entry the view should scroll into sight, if one was just added.
    ///
    /// Best-effort affordance: the view may find the element not rendered
    /// yet and simply do nothing.
    pub fn take_pending_reveal(&mut self) -> Option<(EntryKind, EntryId)> {
        self.pending_reveal.take()
    }

    /// Add a skill by name; see [`skills::add_skill`] for the trimming and
    /// duplicate rules.
    pub fn add_skill(&mut self, raw_name: &str) {
        self.skills = skills::add_skill(&self.skills, raw_name);
    }

    /// Remove any skill with the given name.
    pub fn remove_skill(&mut self, name: &str) {
        self.skills = skills::remove_skill(&self.skills, name);
    }

    /// Rename the skill at `index`.
    pub fn update_skill_name(&mut self, index: usize, name: &str) {
        self.skills = skills::update_skill_name(&self.skills, index, name);
    }

    /// Set the proficiency of the skill at `index`.
    pub fn update_skill_proficiency(&mut self, index: usize, proficiency: Proficiency) {
        self.skills = skills::update_skill_proficiency(&self.skills, index, proficiency);
    }

    /// Completion percentage over the seven primary scalar fields.
    ///
    /// Purely a function of the current draft; whitespace-only values count
    /// as empty.
    pub fn completion(&self) -> u8 {
        let fields = [
            &self.name,
            &self.email,
            &self.bio,
            &self.phone,
            &self.university,
            &self.course,
            &self.year,
        ];
        let filled = fields.iter().filter(|f| !f.trim().is_empty()).count();
        ((filled as f64) * 100.0 / COMPLETION_FIELDS as f64).round() as u8
    }
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self::from_user(&UserRecord::default())
    }
}
