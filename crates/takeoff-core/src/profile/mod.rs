pub mod builtin;
pub mod schema;

use crate::error::TakeoffError;
use schema::ProfileDef;
use std::collections::HashSet;
use std::path::Path;

/// Load a profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<ProfileDef, TakeoffError> {
    let content = std::fs::read_to_string(path).map_err(|e| TakeoffError::ProfileLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_profile(&content, path)
}

/// Parse a profile from a JSON string.
pub fn parse_profile(json: &str, source: &Path) -> Result<ProfileDef, TakeoffError> {
    let profile: ProfileDef = serde_json::from_str(json).map_err(|e| TakeoffError::ProfileLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Parse a profile from a JSON string (no file path context).
pub fn parse_profile_str(json: &str) -> Result<ProfileDef, TakeoffError> {
    let profile: ProfileDef = serde_json::from_str(json).map_err(TakeoffError::Json)?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Validate that a profile is well-formed.
pub fn validate_profile(profile: &ProfileDef) -> Result<(), TakeoffError> {
    if profile.equipment.is_empty() {
        return Err(TakeoffError::ProfileInvalid(
            "equipment must not be empty".into(),
        ));
    }

    let mut seen_codes = HashSet::new();
    for eq in &profile.equipment {
        let well_formed = (1..=4).contains(&eq.code.len())
            && eq.code.chars().all(|c| c.is_ascii_uppercase());
        if !well_formed {
            return Err(TakeoffError::ProfileInvalid(format!(
                "equipment code '{}' must be 1-4 uppercase letters",
                eq.code
            )));
        }

        if !seen_codes.insert(eq.code.as_str()) {
            return Err(TakeoffError::ProfileInvalid(format!(
                "equipment code '{}' is listed more than once",
                eq.code
            )));
        }

        if eq.description.trim().is_empty() {
            return Err(TakeoffError::ProfileInvalid(format!(
                "equipment code '{}' has an empty description",
                eq.code
            )));
        }
    }

    if profile.mounting.is_empty() {
        return Err(TakeoffError::ProfileInvalid(
            "mounting must not be empty".into(),
        ));
    }

    let mut seen_phrases = HashSet::new();
    for phrase in &profile.mounting {
        if phrase.trim().is_empty() {
            return Err(TakeoffError::ProfileInvalid(
                "mounting phrase must not be empty".into(),
            ));
        }
        if !seen_phrases.insert(phrase.to_lowercase()) {
            return Err(TakeoffError::ProfileInvalid(format!(
                "mounting phrase '{}' is listed more than once",
                phrase
            )));
        }
    }

    Ok(())
}
