use serde_json::json;
use talentbridge_profile::profile::{
    EntryCollection, EntryIdGen, EntryKind, ProfileDraft, Proficiency, Skill,
};
use talentbridge_profile::session::UserRecord;

fn user_from_json(value: serde_json::Value) -> UserRecord {
    serde_json::from_value(value).expect("user record")
}

#[test]
fn add_then_remove_restores_collection() {
    let ids = EntryIdGen::default();
    let original = EntryCollection::new(EntryKind::Language);

    let (updated, id) = original.add(&ids);
    assert_eq!(updated.len(), 1);

    let restored = updated.remove(id);
    assert_eq!(restored, original);
}

#[test]
fn remove_unknown_id_is_a_noop() {
    let ids = EntryIdGen::default();
    let (collection, id) = EntryCollection::new(EntryKind::Achievement).add(&ids);
    let other = ids.next_id();

    assert_ne!(id, other);
    assert_eq!(collection.remove(other), collection);
}

#[test]
fn update_touches_only_the_target_field() {
    let ids = EntryIdGen::default();
    let (collection, first) = EntryCollection::new(EntryKind::Education).add(&ids);
    let (collection, second) = collection.add(&ids);

    let updated = collection.update(first, "institution", "Aalto University");

    let first_entry = updated.get(first).expect("first entry");
    assert_eq!(first_entry.field("institution"), Some("Aalto University"));
    assert_eq!(first_entry.field("degree"), Some(""));

    // The other entry is untouched.
    assert_eq!(updated.get(second), collection.get(second));
}

#[test]
fn update_with_unknown_id_is_a_noop() {
    let ids = EntryIdGen::default();
    let (collection, _) = EntryCollection::new(EntryKind::Course).add(&ids);
    let absent = ids.next_id();

    assert_eq!(collection.update(absent, "name", "Databases"), collection);
}

#[test]
fn sequential_adds_get_distinct_ids_in_creation_order() {
    let mut draft = ProfileDraft::default();

    let first = draft.add_entry(EntryKind::Education);
    let second = draft.add_entry(EntryKind::Education);

    assert_ne!(first, second);
    let ids: Vec<_> = draft
        .collection(EntryKind::Education)
        .iter()
        .map(|entry| entry.id)
        .collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn education_and_course_adds_queue_a_reveal() {
    let mut draft = ProfileDraft::default();

    let id = draft.add_entry(EntryKind::Education);
    assert_eq!(draft.take_pending_reveal(), Some((EntryKind::Education, id)));
    // Taking it clears it.
    assert_eq!(draft.take_pending_reveal(), None);

    let id = draft.add_entry(EntryKind::Course);
    assert_eq!(draft.take_pending_reveal(), Some((EntryKind::Course, id)));

    draft.add_entry(EntryKind::Language);
    assert_eq!(draft.take_pending_reveal(), None);
}

#[test]
fn every_scalar_field_has_a_setter() {
    let mut draft = ProfileDraft::default();

    draft.set_name("Ana");
    draft.set_email("ana@example.com");
    draft.set_bio("Student");
    draft.set_phone("123");
    draft.set_university("KTH");
    draft.set_course("CS");
    draft.set_year("3");
    draft.set_role("student");
    draft.set_company_name("Acme");

    assert_eq!(draft.name, "Ana");
    assert_eq!(draft.email, "ana@example.com");
    assert_eq!(draft.bio, "Student");
    assert_eq!(draft.phone, "123");
    assert_eq!(draft.university, "KTH");
    assert_eq!(draft.course, "CS");
    assert_eq!(draft.year, "3");
    assert_eq!(draft.role, "student");
    assert_eq!(draft.company_name, "Acme");
}

#[test]
fn add_skill_trims_and_defaults_to_beginner() {
    let mut draft = ProfileDraft::default();
    draft.add_skill("  Python  ");

    assert_eq!(
        draft.skills,
        vec![Skill::Rated {
            name: "Python".to_string(),
            proficiency: Proficiency::Beginner,
        }]
    );
}

#[test]
fn add_skill_ignores_empty_and_duplicate_names() {
    let mut draft = ProfileDraft::default();
    draft.add_skill("Python");
    draft.add_skill("Python");
    draft.add_skill("   ");

    assert_eq!(draft.skills.len(), 1);
}

#[test]
fn skill_names_compare_case_sensitively() {
    let mut draft = ProfileDraft::default();
    draft.add_skill("python");
    draft.add_skill("Python");

    // Different casing means different skills.
    assert_eq!(draft.skills.len(), 2);
}

#[test]
fn remove_skill_matches_both_representations() {
    let skills = vec![
        Skill::Bare("Go".to_string()),
        Skill::Rated {
            name: "Rust".to_string(),
            proficiency: Proficiency::Advanced,
        },
    ];

    let removed = talentbridge_profile::profile::remove_skill(&skills, "Go");
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].name(), "Rust");
}

#[test]
fn proficiency_edit_upgrades_a_bare_skill() {
    let skills = vec![Skill::Bare("Go".to_string())];

    let updated =
        talentbridge_profile::profile::update_skill_proficiency(&skills, 0, Proficiency::Expert);
    assert_eq!(
        updated,
        vec![Skill::Rated {
            name: "Go".to_string(),
            proficiency: Proficiency::Expert,
        }]
    );

    // Out-of-range indices change nothing.
    let unchanged =
        talentbridge_profile::profile::update_skill_proficiency(&skills, 5, Proficiency::Expert);
    assert_eq!(unchanged, skills);
}

#[test]
fn name_edit_preserves_existing_proficiency() {
    let skills = vec![Skill::Rated {
        name: "Rust".to_string(),
        proficiency: Proficiency::Advanced,
    }];

    let updated = talentbridge_profile::profile::update_skill_name(&skills, 0, "Rustlang");
    assert_eq!(
        updated,
        vec![Skill::Rated {
            name: "Rustlang".to_string(),
            proficiency: Proficiency::Advanced,
        }]
    );
}

#[test]
fn initialization_normalizes_legacy_skills() {
    let user = user_from_json(json!({
        "name": "Ana",
        "email": "",
        "skills": ["Go"]
    }));

    let mut draft = ProfileDraft::from_user(&user);
    assert_eq!(
        draft.skills,
        vec![Skill::Rated {
            name: "Go".to_string(),
            proficiency: Proficiency::Beginner,
        }]
    );

    draft.update_skill_proficiency(0, Proficiency::Expert);
    assert_eq!(
        draft.skills,
        vec![Skill::Rated {
            name: "Go".to_string(),
            proficiency: Proficiency::Expert,
        }]
    );
}

#[test]
fn initialization_assigns_fresh_entry_ids() {
    let user = user_from_json(json!({
        "education": [
            { "institution": "MIT", "degree": "BSc" },
            { "institution": "KTH", "degree": "MSc" }
        ]
    }));

    let draft = ProfileDraft::from_user(&user);
    let education = draft.collection(EntryKind::Education);
    assert_eq!(education.len(), 2);

    let ids: Vec<_> = education.iter().map(|entry| entry.id).collect();
    assert_ne!(ids[0], ids[1]);
    assert_eq!(
        education.iter().next().unwrap().field("institution"),
        Some("MIT")
    );
}

#[test]
fn completion_counts_three_of_seven_as_43() {
    let user = user_from_json(json!({
        "name": "Ana",
        "email": "ana@example.com",
        "bio": "   ",
        "university": "KTH"
    }));

    let draft = ProfileDraft::from_user(&user);
    assert_eq!(draft.completion(), 43);
}

#[test]
fn completion_spans_zero_to_one_hundred() {
    let empty = ProfileDraft::default();
    assert_eq!(empty.completion(), 0);

    let full = user_from_json(json!({
        "name": "Ana",
        "email": "ana@example.com",
        "bio": "Student",
        "phone": "123",
        "university": "KTH",
        "course": "CS",
        "year": "3"
    }));
    assert_eq!(ProfileDraft::from_user(&full).completion(), 100);
}

#[test]
fn draft_serializes_with_wire_field_names() {
    let user = user_from_json(json!({
        "name": "Ana",
        "companyName": "Acme",
        "skills": ["Go"],
        "languages": [{ "name": "English", "level": "C1" }]
    }));

    let value = serde_json::to_value(ProfileDraft::from_user(&user)).expect("serialize");

    assert_eq!(value["companyName"], json!("Acme"));
    assert_eq!(value["skills"][0]["proficiency"], json!("Beginner"));
    assert_eq!(value["languages"][0]["name"], json!("English"));
    // Internal bookkeeping never goes over the wire.
    assert!(value.get("ids").is_none());
    assert!(value.get("pendingReveal").is_none());
}
