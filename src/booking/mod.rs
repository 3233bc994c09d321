pub mod intent;
pub mod ledger;
pub mod link;

pub use intent::{stay_nights, IntentBuilder, SERVICE_BOOKING_POINTS, STAY_BOOKING_POINTS};
pub use ledger::RewardsLedger;
pub use link::chat_link;
