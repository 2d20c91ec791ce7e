//! Campaigns service: goal-driven fundraisers over `/ftcampaign*`.
//!
//! Campaign donations and expenses follow the same lifecycle as fund
//! donations (create → upload-proof → confirm/reject); only the endpoints
//! differ, so this module reuses [`NewDonation`], [`NewExpense`], and
//! [`ProofImage`] from the funds service.

#[cfg(test)]
#[path = "campaigns_test.rs"]
mod campaigns_test;

use serde::Serialize;

use models::{CampaignDonation, CampaignExpense, FundCampaign};

use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::services::funds::{NewDonation, NewExpense, ProofImage};

fn campaigns_path(fund_id: &str) -> String {
    format!("/ftcampaign?fundId={fund_id}")
}

fn campaign_path(campaign_id: &str) -> String {
    format!("/ftcampaign/{campaign_id}")
}

fn close_path(campaign_id: &str) -> String {
    format!("/ftcampaign/{campaign_id}/close")
}

fn campaign_donations_path(campaign_id: &str) -> String {
    format!("/ftcampaign/{campaign_id}/donations")
}

fn donation_proof_path(donation_id: &str) -> String {
    format!("/ftcampaign/donations/{donation_id}/proof")
}

fn donation_decision_path(donation_id: &str, decision: &str) -> String {
    format!("/ftcampaign/donations/{donation_id}/{decision}")
}

fn campaign_expenses_path(campaign_id: &str) -> String {
    format!("/ftcampaign/{campaign_id}/expenses")
}

fn expense_decision_path(expense_id: &str, decision: &str) -> String {
    format!("/ftcampaign/expenses/{expense_id}/{decision}")
}

/// List a fund's campaigns.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn list(api: &ApiClient, fund_id: &str) -> Result<Vec<FundCampaign>, ApiError> {
    api.get(&campaigns_path(fund_id)).await
}

/// Fetch one campaign by id.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn get(api: &ApiClient, campaign_id: &str) -> Result<FundCampaign, ApiError> {
    api.get(&campaign_path(campaign_id)).await
}

/// Body for [`create`].
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    pub fund_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub goal_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// Open a campaign against a fund.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn create(api: &ApiClient, campaign: &NewCampaign) -> Result<FundCampaign, ApiError> {
    api.post("/ftcampaign", campaign).await
}

/// Close a campaign; no further donations are accepted after.
///
/// # Errors
///
/// Returns [`ApiError`]; 403 when the caller is not the organizer.
pub async fn close(api: &ApiClient, campaign_id: &str) -> Result<FundCampaign, ApiError> {
    api.put(&close_path(campaign_id), &()).await
}

/// List a campaign's donations.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn donations(api: &ApiClient, campaign_id: &str) -> Result<Vec<CampaignDonation>, ApiError> {
    api.get(&campaign_donations_path(campaign_id)).await
}

/// Record a donation against a campaign.
///
/// # Errors
///
/// Returns [`ApiError`]; 422 once the campaign is closed.
pub async fn create_donation(
    api: &ApiClient,
    campaign_id: &str,
    donation: &NewDonation,
) -> Result<CampaignDonation, ApiError> {
    api.post(&campaign_donations_path(campaign_id), donation).await
}

/// Attach evidence images to a campaign donation.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn upload_proof(
    api: &ApiClient,
    donation_id: &str,
    images: Vec<ProofImage>,
) -> Result<CampaignDonation, ApiError> {
    let form = super::funds::proof_form(images)?;
    api.post_multipart(&donation_proof_path(donation_id), form).await
}

/// Approve a campaign donation (authorizer only).
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn confirm_donation(
    api: &ApiClient,
    donation_id: &str,
) -> Result<CampaignDonation, ApiError> {
    api.put(&donation_decision_path(donation_id, "confirm"), &()).await
}

/// Reject a campaign donation (authorizer only).
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn reject_donation(
    api: &ApiClient,
    donation_id: &str,
) -> Result<CampaignDonation, ApiError> {
    api.put(&donation_decision_path(donation_id, "reject"), &()).await
}

/// Record an expense against a campaign.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn create_expense(
    api: &ApiClient,
    campaign_id: &str,
    expense: &NewExpense,
) -> Result<CampaignExpense, ApiError> {
    api.post(&campaign_expenses_path(campaign_id), expense).await
}

/// Approve a campaign expense (authorizer only).
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn confirm_expense(api: &ApiClient, expense_id: &str) -> Result<CampaignExpense, ApiError> {
    api.put(&expense_decision_path(expense_id, "confirm"), &()).await
}

/// Reject a campaign expense (authorizer only).
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn reject_expense(api: &ApiClient, expense_id: &str) -> Result<CampaignExpense, ApiError> {
    api.put(&expense_decision_path(expense_id, "reject"), &()).await
}
