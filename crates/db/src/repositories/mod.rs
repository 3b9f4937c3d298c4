//! One repository per table: plain structs with associated async functions
//! over a `PgPool` (or `PgConnection` where a caller owns the transaction).

mod booking_repo;
mod gift_card_repo;
mod guide_repo;
mod loyalty_repo;
mod payment_repo;
mod reconciliation_repo;
mod tour_repo;
mod user_repo;

pub use booking_repo::BookingRepo;
pub use gift_card_repo::GiftCardRepo;
pub use guide_repo::{AssignmentRepo, GuideRepo};
pub use loyalty_repo::LoyaltyRepo;
pub use payment_repo::PaymentRepo;
pub use reconciliation_repo::{CompletionCandidate, ReconciliationRepo};
pub use tour_repo::TourRepo;
pub use user_repo::UserRepo;
