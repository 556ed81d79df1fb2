pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::{DEFAULT_LANES, MeetConfig, PointsTable};
pub use error::{MeetError, Result};
