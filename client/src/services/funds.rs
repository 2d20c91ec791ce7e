//! Funds service: funds, donations, expenses, and the donation flow.
//!
//! DESIGN
//! ======
//! The donation lifecycle is enforced server-side; the client's whole job
//! is to issue create → upload-proof → confirm in order, surface the last
//! server-reported status, and refetch the balance aggregate once a
//! donation is confirmed. [`run_donation_flow`] drives that sequence and
//! tracks a local [`DonationState`] so an out-of-order observation fails
//! loudly instead of desynchronizing the display.
//!
//! There is deliberately no retry, no idempotency key, and no local
//! balance arithmetic — a failed step leaves the donation wherever the
//! server last left it, and "refetch" is the only reconciliation.

#[cfg(test)]
#[path = "funds_test.rs"]
mod funds_test;

use reqwest::multipart::{Form, Part};
use serde::Serialize;

use models::{
    ApprovalStatus, DonationState, Fund, FundBalance, FundDonation, FundExpense, TransitionError,
};

use crate::net::error::ApiError;
use crate::net::http::ApiClient;

fn funds_path(tree_id: &str) -> String {
    format!("/funds?treeId={tree_id}")
}

fn fund_path(fund_id: &str) -> String {
    format!("/funds/{fund_id}")
}

fn balance_path(fund_id: &str) -> String {
    format!("/funds/{fund_id}/balance")
}

fn fund_donations_path(fund_id: &str) -> String {
    format!("/funds/{fund_id}/donations")
}

fn donation_proof_path(donation_id: &str) -> String {
    format!("/donations/{donation_id}/proof")
}

fn donation_decision_path(donation_id: &str, decision: &str) -> String {
    format!("/donations/{donation_id}/{decision}")
}

fn fund_expenses_path(fund_id: &str) -> String {
    format!("/funds/{fund_id}/expenses")
}

fn expense_decision_path(expense_id: &str, decision: &str) -> String {
    format!("/funds/expenses/{expense_id}/{decision}")
}

/// List the funds of a tree.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn list(api: &ApiClient, tree_id: &str) -> Result<Vec<Fund>, ApiError> {
    api.get(&funds_path(tree_id)).await
}

/// Fetch one fund by id.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn get(api: &ApiClient, fund_id: &str) -> Result<Fund, ApiError> {
    api.get(&fund_path(fund_id)).await
}

/// Fetch the server-computed balance aggregate for a fund.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn balance(api: &ApiClient, fund_id: &str) -> Result<FundBalance, ApiError> {
    api.get(&balance_path(fund_id)).await
}

/// List a fund's donations, newest first.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn donations(api: &ApiClient, fund_id: &str) -> Result<Vec<FundDonation>, ApiError> {
    api.get(&fund_donations_path(fund_id)).await
}

/// Body for [`create_donation`].
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonation {
    pub donor_name: String,
    pub amount: f64,
    /// Payment method string (`"cash"`, `"bank_transfer"`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Step 1: record a donation. The server answers with status `Pending`.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn create_donation(
    api: &ApiClient,
    fund_id: &str,
    donation: &NewDonation,
) -> Result<FundDonation, ApiError> {
    api.post(&fund_donations_path(fund_id), donation).await
}

/// An evidence image for the proof-upload step.
#[derive(Clone, Debug)]
pub struct ProofImage {
    /// File name reported in the multipart part.
    pub file_name: String,
    /// MIME type, e.g. `image/jpeg`.
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

pub(crate) fn proof_form(images: Vec<ProofImage>) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for image in images {
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.mime_type)?;
        form = form.part("files", part);
    }
    Ok(form)
}

/// Step 2: attach evidence images to a donation (multipart upload).
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn upload_proof(
    api: &ApiClient,
    donation_id: &str,
    images: Vec<ProofImage>,
) -> Result<FundDonation, ApiError> {
    let form = proof_form(images)?;
    api.post_multipart(&donation_proof_path(donation_id), form).await
}

/// Step 3a: approve a donation (authorizer only). Updates the balance
/// server-side.
///
/// # Errors
///
/// Returns [`ApiError`]; 403 when the caller cannot authorize.
pub async fn confirm_donation(api: &ApiClient, donation_id: &str) -> Result<FundDonation, ApiError> {
    api.put(&donation_decision_path(donation_id, "confirm"), &()).await
}

/// Step 3b: reject a donation (authorizer only).
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn reject_donation(api: &ApiClient, donation_id: &str) -> Result<FundDonation, ApiError> {
    api.put(&donation_decision_path(donation_id, "reject"), &()).await
}

/// Result of a full create → upload-proof → confirm sequence.
#[derive(Clone, Debug)]
pub struct DonationFlowOutcome {
    /// The donation as the server last reported it.
    pub donation: FundDonation,
    /// Client-observed lifecycle position, consistent with the status.
    pub state: DonationState,
    /// Balance refetched after confirmation; `None` unless confirmed.
    pub balance: Option<FundBalance>,
}

/// Drive the whole donation lifecycle in order.
///
/// The final `state` mirrors the last status the server reported: a
/// confirmation that comes back `Pending` (authorizer queue) leaves the
/// flow at `ProofUploaded` with no balance refetch.
///
/// # Errors
///
/// Returns [`ApiError`] from whichever step failed; earlier steps are not
/// rolled back (the server keeps the donation wherever it got to).
pub async fn run_donation_flow(
    api: &ApiClient,
    fund_id: &str,
    donation: &NewDonation,
    images: Vec<ProofImage>,
) -> Result<DonationFlowOutcome, ApiError> {
    let created = create_donation(api, fund_id, donation).await?;
    let state = DonationState::Created;

    let uploaded = upload_proof(api, &created.id, images).await?;
    let state = state.transition(DonationState::ProofUploaded)?;

    let decided = confirm_donation(api, &uploaded.id).await?;
    let (state, refetch) = settle_confirm(state, decided.status)?;

    let balance = if refetch {
        Some(balance_after_confirm(api, &decided.fund_id).await?)
    } else {
        None
    };

    Ok(DonationFlowOutcome { donation: decided, state, balance })
}

/// Fold the confirm call's answer into the local lifecycle position.
///
/// The resolved state is whatever the server last reported: a confirm
/// that comes back `Pending` stays at [`DonationState::ProofUploaded`].
/// The second half of the pair says whether the balance aggregate is
/// worth refetching, which is true only for a confirmed outcome.
///
/// # Errors
///
/// Returns [`TransitionError`] when the reported status implies a jump
/// the lifecycle does not allow.
fn settle_confirm(
    state: DonationState,
    reported: ApprovalStatus,
) -> Result<(DonationState, bool), TransitionError> {
    let reported = DonationState::from_status(reported);
    let state = if reported == state { state } else { state.transition(reported)? };
    Ok((state, state == DonationState::Confirmed))
}

async fn balance_after_confirm(api: &ApiClient, fund_id: &str) -> Result<FundBalance, ApiError> {
    tracing::info!(fund_id, "donation confirmed; refetching balance");
    balance(api, fund_id).await
}

/// Body for [`create_expense`].
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub amount: f64,
    pub purpose: String,
}

/// Record an expense against a fund; starts `Pending` like donations.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn create_expense(
    api: &ApiClient,
    fund_id: &str,
    expense: &NewExpense,
) -> Result<FundExpense, ApiError> {
    api.post(&fund_expenses_path(fund_id), expense).await
}

/// Approve an expense (authorizer only).
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn confirm_expense(api: &ApiClient, expense_id: &str) -> Result<FundExpense, ApiError> {
    api.put(&expense_decision_path(expense_id, "confirm"), &()).await
}

/// Reject an expense (authorizer only).
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn reject_expense(api: &ApiClient, expense_id: &str) -> Result<FundExpense, ApiError> {
    api.put(&expense_decision_path(expense_id, "reject"), &()).await
}
