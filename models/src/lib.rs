//! Shared DTOs for the gia phả backend API.
//!
//! DESIGN
//! ======
//! These types mirror backend payloads field-for-field so serde does the
//! normalization. The backend is inconsistent about field naming across
//! endpoints (`createdOn` vs `createdDate`, `success` vs `status`); every
//! known alternate spelling is handled here with serde aliases so no caller
//! ever has to care which endpoint a record came from.
//!
//! Ownership and lifecycle of every entity is server-side. Nothing in this
//! crate validates business rules beyond the donation lifecycle transition
//! table, which the client needs to sequence its calls correctly.

pub mod account;
pub mod campaign;
pub mod envelope;
pub mod event;
pub mod family;
pub mod funds;
pub mod notification;
pub mod page;
pub mod social;

pub use account::{LoginRequest, LoginResponse, RegisterRequest, User, UserProfile};
pub use campaign::{CampaignDonation, CampaignExpense, FundCampaign};
pub use envelope::{ApiEnvelope, EnvelopeError};
pub use event::Event;
pub use family::{FamilyMember, FamilyTree};
pub use funds::{
    ApprovalStatus, DonationState, Fund, FundBalance, FundDonation, FundExpense, TransitionError,
};
pub use notification::Notification;
pub use page::Page;
pub use social::{Comment, Post, Reaction, ReactionKind};
