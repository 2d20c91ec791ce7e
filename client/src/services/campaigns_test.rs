use super::*;

#[test]
fn paths_format_expected_endpoints() {
    assert_eq!(campaigns_path("f1"), "/ftcampaign?fundId=f1");
    assert_eq!(campaign_path("c1"), "/ftcampaign/c1");
    assert_eq!(close_path("c1"), "/ftcampaign/c1/close");
    assert_eq!(campaign_donations_path("c1"), "/ftcampaign/c1/donations");
    assert_eq!(donation_proof_path("d1"), "/ftcampaign/donations/d1/proof");
    assert_eq!(donation_decision_path("d1", "reject"), "/ftcampaign/donations/d1/reject");
    assert_eq!(campaign_expenses_path("c1"), "/ftcampaign/c1/expenses");
    assert_eq!(expense_decision_path("e1", "confirm"), "/ftcampaign/expenses/e1/confirm");
}

#[test]
fn new_campaign_serializes_goal_amount() {
    let campaign = NewCampaign {
        fund_id: "f1".to_owned(),
        title: "Tu sửa nhà thờ họ".to_owned(),
        description: None,
        goal_amount: 50_000_000.0,
        start_time: Some("2024-06-01T00:00:00Z".to_owned()),
        end_time: None,
    };
    let body = serde_json::to_value(&campaign).unwrap();
    assert_eq!(body["goalAmount"], 50_000_000.0);
    assert!(body.get("endTime").is_none());
}
