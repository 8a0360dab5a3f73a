use crate::{Client, Error};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// ISO 3166-1 alpha-2 code, trimmed and uppercased. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct CountryCode(String);

impl CountryCode {
    pub fn parse(raw: &str) -> Option<CountryCode> {
        let code = raw.trim().to_uppercase();
        if code.is_empty() {
            None
        } else {
            Some(CountryCode(code))
        }
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CountryCode {
    type Error = String;
    fn try_from(raw: String) -> Result<Self, Self::Error> {
        CountryCode::parse(&raw).ok_or_else(|| format!("empty country code {:?}", raw))
    }
}

impl Serialize for CountryCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One element of the country directory listing. Only the requested fields are present.
#[derive(Debug, Default, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub cca2: Option<String>,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
}

impl Country {
    pub fn code(&self) -> Option<CountryCode> {
        self.cca2.as_deref().and_then(CountryCode::parse)
    }
    /// First listed capital, trimmed; `None` when absent or blank.
    pub fn first_capital(&self) -> Option<&str> {
        let first = self.capital.as_ref()?.first()?.trim();
        if first.is_empty() {
            None
        } else {
            Some(first)
        }
    }
}

pub fn fetch_countries(client: &Client, api: &str, fields: &str) -> Result<Vec<Country>, Error> {
    client.get_json(api, &[("fields", fields)])
}
