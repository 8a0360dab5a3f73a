//! Country code to Russian capital name mapping, assembled from the country
//! directory, Wikidata, and English Wikipedia interlanguage links.
//!
//! Each stage takes a mapping and returns a new one. Later stages win:
//! directory < Wikidata < interlanguage link < override table.

use crate::country::{fetch_countries, Country};
use crate::langlinks::{Langlink, Langlinks};
use crate::overrides::Overrides;
use crate::sparql::{self, Binding, Sparql};
use crate::{Client, Config, CountryCode, Error, Mediawiki};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub type CapitalMap = BTreeMap<CountryCode, String>;

/// Sovereign states with their ISO code and one capital label, Russian preferred over English.
pub const CAPITALS_QUERY: &str = r#"
SELECT ?code (SAMPLE(COALESCE(?capRu, ?capEn)) AS ?cap) WHERE {
  ?country wdt:P31 wd:Q6256;
           wdt:P297 ?code;
           wdt:P36 ?capital.
  OPTIONAL { ?capital rdfs:label ?capRu FILTER (lang(?capRu) = "ru") }
  OPTIONAL { ?capital rdfs:label ?capEn FILTER (lang(?capEn) = "en") }
}
GROUP BY ?code
"#;

pub fn knowledge_base_capitals(sparql: &Sparql) -> Result<CapitalMap, Error> {
    let rows = sparql.select(CAPITALS_QUERY)?;
    Ok(from_bindings(&rows))
}

/// First non-empty `cap` per `code`.
pub fn from_bindings(rows: &[Binding]) -> CapitalMap {
    let mut caps = CapitalMap::new();
    for row in rows {
        let cap = sparql::value(row, "cap").trim();
        if cap.is_empty() {
            continue;
        }
        if let Some(code) = CountryCode::parse(sparql::value(row, "code")) {
            caps.entry(code).or_insert_with(|| cap.to_owned());
        }
    }
    caps
}

pub fn directory_capitals(client: &Client, api: &str) -> Result<CapitalMap, Error> {
    let countries = fetch_countries(client, api, "cca2,capital")?;
    Ok(from_countries(&countries))
}

/// First listed capital per code; records without code or capital are dropped.
pub fn from_countries(countries: &[Country]) -> CapitalMap {
    let mut caps = CapitalMap::new();
    for country in countries {
        if let (Some(code), Some(cap)) = (country.code(), country.first_capital()) {
            caps.entry(code).or_insert_with(|| cap.to_owned());
        }
    }
    caps
}

/// Directory baseline overlaid with knowledge-base names. Codes only in the directory are kept.
pub fn merge(baseline: CapitalMap, knowledge_base: &CapitalMap) -> CapitalMap {
    let mut merged = baseline;
    for (code, cap) in knowledge_base {
        if !cap.is_empty() {
            merged.insert(code.clone(), cap.clone());
        }
    }
    merged
}

/// Names with Latin letters were never translated.
pub fn needs_translation(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_alphabetic())
}

/// Replace still-Latin names with their Russian interlanguage link, when one exists.
/// Lookup errors leave the entry unchanged.
pub fn remediate<L: Langlinks>(wiki: &L, caps: CapitalMap) -> CapitalMap {
    caps.into_iter()
        .map(|(code, cap)| {
            if !needs_translation(&cap) {
                return (code, cap);
            }
            match wiki.langlink(&cap, "ru") {
                Ok(Langlink::Found(title)) => {
                    debug!(%code, from = %cap, to = %title, "translated");
                    (code, title)
                }
                Ok(Langlink::Missing) => (code, cap),
                Err(e) => {
                    debug!(%code, %cap, "langlink lookup failed: {}", e);
                    (code, cap)
                }
            }
        })
        .collect()
}

/// Force override names onto codes already present. Never adds codes.
pub fn apply_overrides(caps: CapitalMap, overrides: &Overrides) -> CapitalMap {
    caps.into_iter()
        .map(|(code, cap)| match overrides.get(&code) {
            Some(name) => (code, name.to_owned()),
            None => (code, cap),
        })
        .collect()
}

/// Run every stage against the configured endpoints. Only remediation lookups may fail softly.
pub fn resolve(client: &Client, config: &Config, overrides: &Overrides) -> Result<CapitalMap, Error> {
    let sparql = Sparql::new(client.clone(), &config.sparql_endpoint);
    let knowledge_base = knowledge_base_capitals(&sparql)?;
    info!(count = knowledge_base.len(), "knowledge base capitals");
    let baseline = directory_capitals(client, &config.countries_api)?;
    info!(count = baseline.len(), "directory capitals");
    let merged = merge(baseline, &knowledge_base);
    let wiki = Mediawiki::new(client.clone(), &config.wiki_api);
    let remediated = remediate(&wiki, merged);
    Ok(apply_overrides(remediated, overrides))
}

/// Pretty JSON, keys sorted, non-ASCII written as-is.
pub fn to_json(caps: &CapitalMap) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(caps)?)
}

pub fn write_json(path: &Path, caps: &CapitalMap) -> Result<(), Error> {
    fs::write(path, to_json(caps)?)?;
    Ok(())
}
