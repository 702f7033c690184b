use crate::error::TakeoffError;
use crate::profile::schema::ProfileDef;

const MECHANICAL_JSON: &str = include_str!("../../../../profiles/mechanical.json");

/// Available predefined profiles.
pub const PRESETS: &[&str] = &["mechanical"];

/// Name of the profile used when none is requested.
pub const DEFAULT_PRESET: &str = "mechanical";

/// Load a predefined profile by name.
pub fn load_preset(name: &str) -> Result<ProfileDef, TakeoffError> {
    match name {
        "mechanical" => {
            let profile: ProfileDef = serde_json::from_str(MECHANICAL_JSON)?;
            Ok(profile)
        }
        _ => Err(TakeoffError::ProfileInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
