use super::*;
use serde_json::json;
use shared::domain::Country;

fn record(id: i64, first_name: &str) -> UserRecord {
    UserRecord {
        id: UserId(id),
        first_name: first_name.to_string(),
        last_name: "Smith".to_string(),
        age: 30,
        phone_number: "+1-202-555-0147".to_string(),
        country: Country::UnitedStates,
    }
}

#[test]
fn set_replaces_the_entire_roster() {
    let replacement = vec![record(5, "Nilufar"), record(6, "Tom")];
    let roster = reduce(
        vec![record(1, "Ada"), record(2, "Grace"), record(3, "Mary")],
        RosterAction::Set(replacement.clone()),
    );
    assert_eq!(roster, replacement);
}

#[test]
fn add_appends_to_the_end() {
    let roster = vec![record(1, "Ada"), record(2, "Grace")];
    let added = record(3, "Mary");
    let roster = reduce(roster, RosterAction::Add(added.clone()));
    assert_eq!(roster.len(), 3);
    assert_eq!(roster.last(), Some(&added));
}

#[test]
fn add_to_empty_roster_yields_one_record() {
    let added = record(1, "Ada");
    let roster = reduce(Vec::new(), RosterAction::Add(added.clone()));
    assert_eq!(roster, vec![added]);
}

#[test]
fn edit_merges_only_named_fields_into_the_matching_record() {
    let roster = vec![record(1, "Ada"), record(2, "Grace")];
    let untouched = roster[1].clone();
    let roster = reduce(
        roster,
        RosterAction::Edit {
            id: UserId(1),
            updates: UserUpdate {
                first_name: Some("Adeline".to_string()),
                age: Some(37),
                ..Default::default()
            },
        },
    );
    assert_eq!(roster[0].first_name, "Adeline");
    assert_eq!(roster[0].age, 37);
    assert_eq!(roster[0].last_name, "Smith");
    assert_eq!(roster[0].phone_number, "+1-202-555-0147");
    assert_eq!(roster[0].country, Country::UnitedStates);
    assert_eq!(roster[1], untouched);
}

#[test]
fn edit_renames_first_name_in_place() {
    let before = record(1, "A");
    let roster = reduce(
        vec![before.clone()],
        RosterAction::Edit {
            id: UserId(1),
            updates: UserUpdate {
                first_name: Some("B".to_string()),
                ..Default::default()
            },
        },
    );
    let expected = UserRecord {
        first_name: "B".to_string(),
        ..before
    };
    assert_eq!(roster, vec![expected]);
}

#[test]
fn edit_with_unknown_id_leaves_the_roster_unchanged() {
    let roster = vec![record(1, "Ada"), record(2, "Grace")];
    let reduced = reduce(
        roster.clone(),
        RosterAction::Edit {
            id: UserId(99),
            updates: UserUpdate {
                first_name: Some("Nobody".to_string()),
                ..Default::default()
            },
        },
    );
    assert_eq!(reduced, roster);
}

#[test]
fn delete_removes_the_matching_record() {
    let roster = vec![record(1, "Ada"), record(2, "Grace")];
    let survivor = roster[1].clone();
    let roster = reduce(roster, RosterAction::Delete { id: UserId(1) });
    assert_eq!(roster, vec![survivor]);
    assert!(roster.iter().all(|user| user.id != UserId(1)));
}

#[test]
fn delete_with_unknown_id_leaves_the_roster_unchanged() {
    let roster = vec![record(1, "Ada"), record(2, "Grace")];
    let reduced = reduce(roster.clone(), RosterAction::Delete { id: UserId(7) });
    assert_eq!(reduced, roster);
}

#[test]
fn unsupported_action_is_a_no_op() {
    let roster = vec![record(1, "Ada"), record(2, "Grace")];
    assert_eq!(reduce(roster.clone(), RosterAction::Unsupported), roster);
    assert_eq!(reduce(Vec::new(), RosterAction::Unsupported), Vec::new());
}

#[test]
fn unknown_action_kind_decodes_to_unsupported() {
    let action: RosterAction =
        serde_json::from_value(json!({ "type": "archive" })).expect("decode action");
    assert_eq!(action, RosterAction::Unsupported);

    let roster = vec![record(1, "Ada")];
    assert_eq!(reduce(roster.clone(), action), roster);
}

#[test]
fn edit_action_decodes_with_wire_field_names() {
    let action: RosterAction = serde_json::from_value(json!({
        "type": "edit",
        "payload": { "id": 1, "updates": { "firstName": "B" } }
    }))
    .expect("decode action");
    assert_eq!(
        action,
        RosterAction::Edit {
            id: UserId(1),
            updates: UserUpdate {
                first_name: Some("B".to_string()),
                ..Default::default()
            },
        }
    );
}
