mod election;
mod roster;
mod sessions;
mod tally;

pub use election::ElectionConfigStore;
pub use roster::RosterStore;
pub use sessions::SessionStore;
pub use tally::{CategoryBreakdown, TallyCounts, TallyEngine, Turnout};
