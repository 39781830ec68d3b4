use super::*;
use crate::roster::boat::BoatType;

fn pair(name: &str) -> Crew {
    Crew {
        id: None,
        name: name.into(),
        club_name: "Riverside RC".into(),
        race_name: "Spring Head".into(),
        boat_type: BoatType::from_code("2x").unwrap(),
        member_names: vec!["A".into(), "B".into()],
        cox_name: None,
        coach_name: None,
    }
}

#[test]
fn create_assigns_sequential_ids() {
    let repo = InMemoryCrewRepository::new();
    let a = repo.create(pair("First")).unwrap();
    let b = repo.create(pair("Second")).unwrap();
    assert!(a < b);
    assert_eq!(repo.get(a).unwrap().unwrap().name, "First");
    assert_eq!(repo.get(a).unwrap().unwrap().id, Some(a));
}

#[test]
fn create_validates_first() {
    let repo = InMemoryCrewRepository::new();
    let mut bad = pair("x");
    bad.club_name = String::new();
    assert!(repo.create(bad).is_err());
    assert!(repo.list().unwrap().is_empty());
}

#[test]
fn update_replaces_and_keeps_id() {
    let repo = InMemoryCrewRepository::new();
    let id = repo.create(pair("Old")).unwrap();
    repo.update(id, pair("New")).unwrap();
    let got = repo.get(id).unwrap().unwrap();
    assert_eq!(got.name, "New");
    assert_eq!(got.id, Some(id));
}

#[test]
fn update_and_delete_of_missing_id_fail() {
    let repo = InMemoryCrewRepository::new();
    assert!(repo.update(CrewId(42), pair("x")).is_err());
    assert!(repo.delete(CrewId(42)).is_err());
}

#[test]
fn delete_removes_record() {
    let repo = InMemoryCrewRepository::new();
    let id = repo.create(pair("x")).unwrap();
    repo.delete(id).unwrap();
    assert!(repo.get(id).unwrap().is_none());
}

#[test]
fn list_is_id_ordered() {
    let repo = InMemoryCrewRepository::new();
    for name in ["c", "a", "b"] {
        repo.create(pair(name)).unwrap();
    }
    let names: Vec<String> = repo.list().unwrap().into_iter().map(|c| c.name).collect();
    assert_eq!(names, ["c", "a", "b"]);
}
