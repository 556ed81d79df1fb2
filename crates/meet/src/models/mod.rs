mod entrant;
mod gender;
mod heat;
mod result;
mod time_value;

pub use entrant::Entrant;
pub use gender::Gender;
pub use heat::Heat;
pub use result::{IndividualStanding, RankedResult, ResultRow, ScoreSheet, TeamStanding};
pub use time_value::{TimeValue, format_seconds};
