//! Campaign DTOs for the `/ftcampaign*` endpoints.
//!
//! Campaigns are goal-driven fundraisers layered over a fund. Their
//! donations and expenses reuse the fund lifecycle (`Pending -> Approved |
//! Rejected`) with campaign-scoped endpoints.

use serde::{Deserialize, Serialize};

use crate::funds::ApprovalStatus;

/// A fundraising campaign with a goal amount and a time window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundCampaign {
    /// Unique campaign identifier (UUID string).
    pub id: String,
    /// Backing fund (UUID string).
    pub fund_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Fundraising target.
    pub goal_amount: f64,
    /// Server-computed sum of confirmed campaign donations.
    #[serde(default)]
    pub raised_amount: f64,
    /// Campaign open timestamp (ISO 8601).
    #[serde(default)]
    pub start_time: Option<String>,
    /// Campaign close timestamp; open-ended campaigns omit it.
    #[serde(default)]
    pub end_time: Option<String>,
    /// Set once the organizer closes the campaign.
    #[serde(default)]
    pub is_closed: bool,
    #[serde(default, alias = "createdDate")]
    pub created_on: Option<String>,
    #[serde(default, alias = "lastModifiedDate")]
    pub last_modified_on: Option<String>,
}

/// A donation pledged to a campaign.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDonation {
    /// Unique donation identifier (UUID string).
    pub id: String,
    /// Campaign donated to (UUID string).
    pub campaign_id: String,
    #[serde(default)]
    pub donor_id: Option<String>,
    pub donor_name: String,
    pub amount: f64,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub proof_urls: Vec<String>,
    #[serde(default, alias = "createdDate")]
    pub created_on: Option<String>,
    #[serde(default, alias = "lastModifiedDate")]
    pub last_modified_on: Option<String>,
}

/// An expense charged against a campaign.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignExpense {
    /// Unique expense identifier (UUID string).
    pub id: String,
    /// Campaign paid from (UUID string).
    pub campaign_id: String,
    pub amount: f64,
    pub purpose: String,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub proof_urls: Vec<String>,
    #[serde(default, alias = "createdDate")]
    pub created_on: Option<String>,
    #[serde(default, alias = "lastModifiedDate")]
    pub last_modified_on: Option<String>,
}
