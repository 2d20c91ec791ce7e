use super::*;

#[test]
fn member_decodes_full_record() {
    let member: FamilyMember = serde_json::from_str(
        r#"{
            "id": "m1",
            "familyTreeId": "t1",
            "fullName": "Nguyễn Văn Tổ",
            "gender": "male",
            "generation": 1,
            "spouseIds": ["m2"],
            "dateOfBirth": "1890-03-01",
            "dateOfDeath": "1960-11-20",
            "createdOn": "2024-02-02T10:00:00Z"
        }"#,
    )
    .unwrap();
    assert_eq!(member.generation, Some(1));
    assert_eq!(member.spouse_ids, vec!["m2".to_owned()]);
    assert!(member.father_id.is_none());
}

#[test]
fn member_defaults_missing_relations_to_empty() {
    let member: FamilyMember = serde_json::from_str(
        r#"{"id": "m3", "familyTreeId": "t1", "fullName": "Cháu"}"#,
    )
    .unwrap();
    assert!(member.spouse_ids.is_empty());
    assert!(member.date_of_death.is_none());
}

#[test]
fn tree_accepts_created_date_alias() {
    let tree: FamilyTree = serde_json::from_str(
        r#"{"id": "t1", "name": "Họ Nguyễn", "ownerId": "u1", "createdDate": "2023-01-01T00:00:00Z"}"#,
    )
    .unwrap();
    assert_eq!(tree.created_on.as_deref(), Some("2023-01-01T00:00:00Z"));
    assert!(tree.member_count.is_none());
}
