use super::*;

#[test]
fn paths_format_expected_endpoints() {
    assert_eq!(funds_path("t1"), "/funds?treeId=t1");
    assert_eq!(fund_path("f1"), "/funds/f1");
    assert_eq!(balance_path("f1"), "/funds/f1/balance");
    assert_eq!(fund_donations_path("f1"), "/funds/f1/donations");
    assert_eq!(donation_proof_path("d1"), "/donations/d1/proof");
    assert_eq!(donation_decision_path("d1", "confirm"), "/donations/d1/confirm");
    assert_eq!(donation_decision_path("d1", "reject"), "/donations/d1/reject");
    assert_eq!(fund_expenses_path("f1"), "/funds/f1/expenses");
    assert_eq!(expense_decision_path("e1", "confirm"), "/funds/expenses/e1/confirm");
}

#[test]
fn new_donation_body_omits_unset_fields() {
    let donation = NewDonation {
        donor_name: "Bà Tư".to_owned(),
        amount: 200_000.0,
        method: Some("cash".to_owned()),
        note: None,
    };
    let body = serde_json::to_value(&donation).unwrap();
    assert_eq!(body["donorName"], "Bà Tư");
    assert_eq!(body["method"], "cash");
    assert!(body.get("note").is_none());
}

#[test]
fn proof_form_accepts_multiple_images() {
    let images = vec![
        ProofImage {
            file_name: "receipt-1.jpg".to_owned(),
            mime_type: "image/jpeg".to_owned(),
            bytes: vec![0xFF, 0xD8],
        },
        ProofImage {
            file_name: "receipt-2.png".to_owned(),
            mime_type: "image/png".to_owned(),
            bytes: vec![0x89, 0x50],
        },
    ];
    assert!(proof_form(images).is_ok());
}

#[test]
fn settle_confirm_approved_advances_and_refetches() {
    let (state, refetch) =
        settle_confirm(DonationState::ProofUploaded, ApprovalStatus::Approved).unwrap();
    assert_eq!(state, DonationState::Confirmed);
    assert!(refetch);
}

#[test]
fn settle_confirm_pending_stays_put_without_refetch() {
    let (state, refetch) =
        settle_confirm(DonationState::ProofUploaded, ApprovalStatus::Pending).unwrap();
    assert_eq!(state, DonationState::ProofUploaded);
    assert!(!refetch);
}

#[test]
fn settle_confirm_rejected_is_terminal_without_refetch() {
    let (state, refetch) =
        settle_confirm(DonationState::ProofUploaded, ApprovalStatus::Rejected).unwrap();
    assert_eq!(state, DonationState::Rejected);
    assert!(!refetch);
}

#[test]
fn settle_confirm_rejects_impossible_jump() {
    // A decision reported before the proof step is a lifecycle violation.
    let error = settle_confirm(DonationState::Created, ApprovalStatus::Approved).unwrap_err();
    assert_eq!(error.from, DonationState::Created);
    assert_eq!(error.to, DonationState::Confirmed);
}

#[test]
fn proof_form_rejects_garbage_mime() {
    let images = vec![ProofImage {
        file_name: "x".to_owned(),
        mime_type: "not a mime".to_owned(),
        bytes: vec![],
    }];
    assert!(proof_form(images).is_err());
}
