pub mod models;
pub mod validator;

pub use models::{MeetData, RegistrationFile, SwimmerData};
pub use validator::{RegistrationValidator, ValidationReport};

use crate::Result;
use std::path::Path;

pub async fn load(path: &Path) -> Result<RegistrationFile> {
    let json_content = tokio::fs::read_to_string(path).await?;
    let registration: RegistrationFile = serde_json::from_str(&json_content)?;
    Ok(registration)
}
