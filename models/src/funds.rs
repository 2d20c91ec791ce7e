//! Fund DTOs and the donation/expense lifecycle.
//!
//! DESIGN
//! ======
//! Donations and expenses move through a server-enforced lifecycle:
//!
//!   Created -> ProofUploaded -> Confirmed | Rejected
//!
//! The client never decides outcomes; it sequences the create / upload-proof
//! / confirm calls in order and displays whatever status the server reports.
//! [`DonationState::transition`] encodes the legal order so the flow driver
//! can refuse to issue calls the server would reject anyway, and tests can
//! pin the table down.

#[cfg(test)]
#[path = "funds_test.rs"]
mod funds_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Approval status the backend reports on donations and expenses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    #[serde(alias = "pending")]
    Pending,
    #[serde(alias = "approved")]
    Approved,
    #[serde(alias = "rejected")]
    Rejected,
}

impl ApprovalStatus {
    /// Wire string as the backend spells it.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by [`DonationState::transition`] for out-of-order calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid donation transition: {from} -> {to}")]
pub struct TransitionError {
    pub from: DonationState,
    pub to: DonationState,
}

/// Client-observed position of a donation in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationState {
    /// `create` succeeded; no evidence attached yet.
    Created,
    /// `uploadProof` succeeded; awaiting the authorizer's decision.
    ProofUploaded,
    /// Authorizer approved; the fund balance has been updated server-side.
    Confirmed,
    /// Authorizer rejected; the donation does not count toward the balance.
    Rejected,
}

impl DonationState {
    /// Apply a transition, rejecting any order the lifecycle does not allow.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] when `to` is not reachable from `self`.
    pub fn transition(self, to: DonationState) -> Result<DonationState, TransitionError> {
        let legal = matches!(
            (self, to),
            (Self::Created, Self::ProofUploaded)
                | (Self::ProofUploaded, Self::Confirmed | Self::Rejected)
        );
        if legal {
            Ok(to)
        } else {
            Err(TransitionError { from: self, to })
        }
    }

    /// Whether this state admits no further transitions.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Confirmed | Self::Rejected)
    }

    /// Map a server-reported approval status onto the lifecycle.
    ///
    /// `Pending` means the authorizer has not decided, which from the
    /// client's vantage point is the proof-uploaded state.
    #[must_use]
    pub fn from_status(status: ApprovalStatus) -> Self {
        match status {
            ApprovalStatus::Pending => Self::ProofUploaded,
            ApprovalStatus::Approved => Self::Confirmed,
            ApprovalStatus::Rejected => Self::Rejected,
        }
    }
}

impl fmt::Display for DonationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Created => "created",
            Self::ProofUploaded => "proof_uploaded",
            Self::Confirmed => "confirmed",
            Self::Rejected => "rejected",
        };
        f.write_str(label)
    }
}

/// A fund attached to a family tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    /// Unique fund identifier (UUID string).
    pub id: String,
    /// Tree this fund belongs to (UUID string).
    pub family_tree_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "createdDate")]
    pub created_on: Option<String>,
    #[serde(default, alias = "lastModifiedDate")]
    pub last_modified_on: Option<String>,
}

/// Server-computed balance aggregate for a fund.
///
/// Only confirmed donations and expenses count; the client refetches this
/// after every confirmation rather than reconciling locally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundBalance {
    /// Fund this aggregate belongs to (UUID string).
    pub fund_id: String,
    pub total_donated: f64,
    pub total_expensed: f64,
    pub balance: f64,
}

/// A donation into a fund.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundDonation {
    /// Unique donation identifier (UUID string).
    pub id: String,
    /// Fund donated to (UUID string).
    pub fund_id: String,
    /// Donating user, when the donor has an account.
    #[serde(default)]
    pub donor_id: Option<String>,
    /// Donor display name, free text for offline donors.
    pub donor_name: String,
    pub amount: f64,
    /// Payment method string (`"cash"`, `"bank_transfer"`, ...).
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    pub status: ApprovalStatus,
    /// Evidence image URLs attached by `uploadProof`.
    #[serde(default)]
    pub proof_urls: Vec<String>,
    #[serde(default, alias = "createdDate")]
    pub created_on: Option<String>,
    #[serde(default, alias = "lastModifiedDate")]
    pub last_modified_on: Option<String>,
}

/// An expense paid out of a fund; same lifecycle as donations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundExpense {
    /// Unique expense identifier (UUID string).
    pub id: String,
    /// Fund paid from (UUID string).
    pub fund_id: String,
    pub amount: f64,
    /// What the money was spent on.
    pub purpose: String,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub proof_urls: Vec<String>,
    #[serde(default, alias = "createdDate")]
    pub created_on: Option<String>,
    #[serde(default, alias = "lastModifiedDate")]
    pub last_modified_on: Option<String>,
}
