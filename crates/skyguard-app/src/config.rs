//! Rules loading for the driver binary.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use skyguard_core::rules::GameRules;

/// Load rules from a JSON file, or the defaults when no path is given.
/// Fields missing from the file keep their default values.
pub fn load_rules(path: Option<&Path>) -> Result<GameRules> {
    let rules = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read rules file {}", path.display()))?;
            parse_rules(&text).with_context(|| format!("invalid rules in {}", path.display()))?
        }
        None => GameRules::default(),
    };
    Ok(rules)
}

/// Parse and validate a rules document.
pub fn parse_rules(text: &str) -> Result<GameRules> {
    let rules: GameRules = serde_json::from_str(text).context("rules are not valid JSON")?;
    rules.validate()?;
    Ok(rules)
}
