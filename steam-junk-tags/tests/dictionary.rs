use steam_junk_catalog::TagEntry;
use steam_junk_tags::{TagDictionary, TagError};

#[test]
fn assign_is_idempotent() {
    let mut dict = TagDictionary::new();
    let first = dict.assign("Action").unwrap();
    let second = dict.assign("Action").unwrap();
    assert_eq!(first, second);
    assert_eq!(dict.len(), 1);
}

#[test]
fn assign_trims_names() {
    let mut dict = TagDictionary::new();
    let id = dict.assign("  Open World ").unwrap();
    assert_eq!(dict.assign("Open World"), Some(id));
    assert_eq!(dict.name_of(id), Some("Open World"));
}

#[test]
fn assign_is_case_sensitive() {
    let mut dict = TagDictionary::new();
    let upper = dict.assign("RPG").unwrap();
    let lower = dict.assign("rpg").unwrap();
    assert_ne!(upper, lower);
    assert_eq!(dict.len(), 2);
}

#[test]
fn assign_blank_gets_no_id() {
    let mut dict = TagDictionary::new();
    assert_eq!(dict.assign("   "), None);
    assert!(dict.is_empty());
    assert_eq!(dict.next_id(), 1);
}

#[test]
fn ids_follow_first_appearance() {
    let mut dict = TagDictionary::new();
    let ids: Vec<u32> = ["Indie", "Action", "Indie", "Puzzle", "Action"]
        .iter()
        .map(|t| dict.assign(t).unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 1, 3, 2]);

    let names: Vec<&str> = dict.entries().iter().map(|e| e.tag_name.as_str()).collect();
    assert_eq!(names, vec!["Indie", "Action", "Puzzle"]);
}

#[test]
fn reloaded_snapshot_continues_after_max_id() {
    let mut dict = TagDictionary::from_entries(vec![
        TagEntry {
            id: 3,
            tag_name: "Action".to_string(),
        },
        TagEntry {
            id: 41,
            tag_name: "RPG".to_string(),
        },
    ])
    .unwrap();

    assert_eq!(dict.assign("RPG"), Some(41));
    assert_eq!(dict.assign("Strategy"), Some(42));
    assert_eq!(dict.next_id(), 43);
}

#[test]
fn persist_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("tags.csv");

    let mut dict = TagDictionary::new();
    for tag in ["Action", "Souls-like", "Difficult", "Dark Fantasy"] {
        dict.assign(tag);
    }
    dict.persist(&path).unwrap();

    let reloaded = TagDictionary::load(&path).unwrap();
    assert_eq!(reloaded.entries(), dict.entries());
    assert_eq!(reloaded.next_id(), dict.next_id());
    for entry in dict.entries() {
        assert_eq!(reloaded.get(&entry.tag_name), Some(entry.id));
    }
    assert!(!path.with_extension("csv.tmp").exists());
}

#[test]
fn persist_orders_by_id() {
    let dict = TagDictionary::from_entries(vec![
        TagEntry {
            id: 2,
            tag_name: "Zombies".to_string(),
        },
        TagEntry {
            id: 1,
            tag_name: "Survival".to_string(),
        },
    ])
    .unwrap();

    let mut out = Vec::new();
    dict.write_to(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "id,tag_name\n1,Survival\n2,Zombies\n"
    );
}

#[test]
fn names_with_commas_are_quoted() {
    let mut dict = TagDictionary::new();
    dict.assign("Sci-fi, Space");
    let mut out = Vec::new();
    dict.write_to(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out.clone()).unwrap(),
        "id,tag_name\n1,\"Sci-fi, Space\"\n"
    );
    let reloaded = TagDictionary::from_reader(out.as_slice()).unwrap();
    assert_eq!(reloaded.get("Sci-fi, Space"), Some(1));
}

#[test]
fn load_missing_snapshot_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let dict = TagDictionary::load(&dir.path().join("tags.csv")).unwrap();
    assert!(dict.is_empty());
    assert_eq!(dict.next_id(), 1);
}

#[test]
fn load_rejects_duplicate_names() {
    let snapshot = "id,tag_name\n1,Action\n2,Action\n";
    let err = TagDictionary::from_reader(snapshot.as_bytes()).unwrap_err();
    assert!(matches!(err, TagError::InvalidSnapshot(_)));
}

#[test]
fn load_rejects_snapshot_at_max_id() {
    let snapshot = "id,tag_name\n4294967295,Action\n";
    let err = TagDictionary::from_reader(snapshot.as_bytes()).unwrap_err();
    assert!(matches!(err, TagError::InvalidSnapshot(_)));
}

#[test]
fn load_rejects_non_numeric_ids() {
    let snapshot = "id,tag_name\none,Action\n";
    let err = TagDictionary::from_reader(snapshot.as_bytes()).unwrap_err();
    assert!(matches!(err, TagError::Csv(_)));
}
