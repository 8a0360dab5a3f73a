//! Hand-maintained capital name corrections, shipped as `data/capital_overrides.json`.

use crate::{CountryCode, Error};
use serde::Deserialize;
use std::collections::BTreeMap;

const BUILTIN: &str = include_str!("../data/capital_overrides.json");

#[derive(Debug, Clone, Deserialize)]
pub struct Overrides {
    pub version: u32,
    pub capitals: BTreeMap<CountryCode, String>,
}

impl Overrides {
    pub fn builtin() -> Result<Overrides, Error> {
        Overrides::from_json(BUILTIN)
    }
    pub fn from_json(text: &str) -> Result<Overrides, Error> {
        Ok(serde_json::from_str(text)?)
    }
    pub fn get(&self, code: &CountryCode) -> Option<&str> {
        self.capitals.get(code).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_parses() {
        let overrides = Overrides::builtin().unwrap();
        assert!(overrides.version >= 1);
        assert!(!overrides.capitals.is_empty());
        assert!(overrides.capitals.values().all(|name| !name.trim().is_empty()));
        let um = CountryCode::parse("UM").unwrap();
        assert_eq!(overrides.get(&um), Some("Вашингтон"));
    }

    #[test]
    fn builtin_codes_are_two_letters() {
        let overrides = Overrides::builtin().unwrap();
        for code in overrides.capitals.keys() {
            assert_eq!(code.as_str().len(), 2, "{}", code);
            assert!(code.as_str().chars().all(|c| c.is_ascii_uppercase()), "{}", code);
        }
    }

    #[test]
    fn empty_code_is_rejected() {
        assert!(Overrides::from_json(r#"{"version":1,"capitals":{"":"x"}}"#).is_err());
    }
}
