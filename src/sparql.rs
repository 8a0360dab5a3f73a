use crate::{Client, Error};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct Term {
    pub value: String,
}

/// One result row: variable name to bound term. Unbound variables are absent.
pub type Binding = HashMap<String, Term>;

#[derive(Debug, Default, Deserialize)]
struct SelectResponse {
    #[serde(default)]
    results: SelectResults,
}

#[derive(Debug, Default, Deserialize)]
struct SelectResults {
    #[serde(default)]
    bindings: Vec<Binding>,
}

pub struct Sparql {
    client: Client,
    endpoint: String,
}
impl Sparql {
    pub fn new(client: Client, endpoint: &str) -> Sparql {
        Sparql {
            client,
            endpoint: endpoint.to_owned(),
        }
    }
    pub fn select(&self, query: &str) -> Result<Vec<Binding>, Error> {
        let response: SelectResponse = self
            .client
            .get_json(&self.endpoint, &[("format", "json"), ("query", query)])?;
        Ok(response.results.bindings)
    }
}

/// Value bound to `var` in `row`, or `""` if unbound.
pub fn value<'a>(row: &'a Binding, var: &str) -> &'a str {
    row.get(var).map(|term| term.value.as_str()).unwrap_or("")
}
