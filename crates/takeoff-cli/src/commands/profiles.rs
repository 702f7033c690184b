use std::path::Path;
use takeoff_core::error::TakeoffError;
use takeoff_core::profile::builtin;

pub fn list() -> Result<(), TakeoffError> {
    println!("Available predefined profiles:\n");
    for name in builtin::PRESETS {
        let p = builtin::load_preset(name)?;
        let default_marker = if *name == builtin::DEFAULT_PRESET {
            " [default]"
        } else {
            ""
        };
        println!("  {:<12} {} (v{}){}", name, p.name, p.version, default_marker);
        if let Some(ref desc) = p.description {
            println!("               {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), TakeoffError> {
    let p = builtin::load_preset(preset)?;

    println!("{} (version {})\n", p.name, p.version);

    if let Some(ref desc) = p.description {
        println!("{}\n", desc);
    }

    println!("Equipment codes (matched as whole words, leftmost match wins):\n");
    for eq in &p.equipment {
        let weak = if eq.weak { "  (dropped when mentioned alone)" } else { "" };
        println!("  {:<6} {}{}", eq.code, eq.description, weak);
    }

    println!("\nMounting phrases (first listed phrase found in a line wins):\n");
    for (i, phrase) in p.mounting.iter().enumerate() {
        println!("  {}. {}", i + 1, phrase);
    }
    println!();

    Ok(())
}

pub fn schema() -> Result<(), TakeoffError> {
    print!(
        r#"JSON Profile Schema
===================

A profile defines the vocabulary `takeoff extract` looks for in drawing
text: which equipment codes exist, what they are called, and which
mounting phrases to recognize.

Top-level fields:
  name          (string, required)  Human-readable name of the profile
  description   (string, optional)  Which drawing sets it is meant for
  version       (string, required)  Version identifier (e.g., "1.0")
  equipment     (array, required)   Equipment codes (see below)
  mounting      (array, required)   Mounting phrases, in priority order.
                                    Matching is case-insensitive; when a
                                    line contains several, the one listed
                                    first is reported.

Each entry in the "equipment" array:
  code          (string, required)  1-4 uppercase letters, matched as a
                                    whole word (e.g., "FCU" in "FCU-12").
  description   (string, required)  Name shown in the Item/Fixture Type
                                    column (e.g., "Fan-Coil Unit").
  weak          (bool, optional)    If true, a line whose only field is
                                    this code is dropped as noise.
                                    Default: false

Example:
{{
  "name": "Plumbing fixtures",
  "version": "1.0",
  "equipment": [
    {{ "code": "WH", "description": "Water Heater" }},
    {{ "code": "FD", "description": "Floor Drain", "weak": true }}
  ],
  "mounting": ["wall-hung", "floor-mounted", "recessed"]
}}
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), TakeoffError> {
    let p = takeoff_core::profile::load_profile(file)?;

    println!("Profile '{}' (v{}) is valid.", p.name, p.version);
    println!("  Equipment codes: {}", p.equipment.len());
    println!("  Mounting phrases: {}", p.mounting.join(", "));

    // Potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    for eq in &p.equipment {
        if eq.code.len() == 1 && !eq.weak {
            warnings.push(format!(
                "single-letter code '{}' is not weak; bare mentions will be reported",
                eq.code
            ));
        }
    }
    for phrase in &p.mounting {
        if phrase.chars().any(|c| c.is_uppercase()) {
            warnings.push(format!(
                "mounting phrase '{}' is matched case-insensitively but reported as written",
                phrase
            ));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
