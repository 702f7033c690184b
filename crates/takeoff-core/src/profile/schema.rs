use serde::{Deserialize, Serialize};

/// A drawing-set profile: the vocabulary the extractors match against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Equipment codes, each carrying its own description.
    pub equipment: Vec<EquipmentDef>,
    /// Mounting phrases in priority order. The first listed phrase found in
    /// a line wins, wherever it appears in the text.
    pub mounting: Vec<String>,
}

/// A single equipment code within a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentDef {
    /// Whole-word match token, 1-4 uppercase letters (e.g. "FCU").
    pub code: String,
    /// Display name (e.g. "Fan-Coil Unit").
    pub description: String,
    /// Bare mentions of a weak code (no other field on the line) are dropped.
    #[serde(default)]
    pub weak: bool,
}

impl ProfileDef {
    pub fn description_for(&self, code: &str) -> Option<&str> {
        self.equipment
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.description.as_str())
    }

    pub fn is_weak(&self, code: &str) -> bool {
        self.equipment.iter().any(|e| e.weak && e.code == code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.equipment.iter().map(|e| e.code.as_str())
    }
}
