// Copyright © 2014, Peter Atashian

pub mod capitals;
pub mod config;
pub mod country;
pub mod flags;
pub mod langlinks;
pub mod logging;
pub mod overrides;
pub mod sparql;

pub use config::Config;
pub use country::CountryCode;
pub use serde_json::Value as Json;

use reqwest::blocking::Client as HttpClient;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("api error: {0}")]
    Api(Json),
    #[error("empty response from {0}")]
    EmptyBody(String),
}

/// Blocking HTTP client that stamps every request with the configured user agent.
#[derive(Clone, Debug)]
pub struct Client {
    http: HttpClient,
}
impl Client {
    pub fn new(useragent: &str) -> Result<Client, Error> {
        let http = HttpClient::builder().user_agent(useragent).build()?;
        Ok(Client { http })
    }
    pub fn from_config(config: &Config) -> Result<Client, Error> {
        Client::new(&config.useragent)
    }
    pub fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        args: &[(&str, &str)],
    ) -> Result<T, Error> {
        let response = self.http.get(url).query(args).send()?.error_for_status()?;
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
    pub fn get_bytes(&self, url: &str) -> Result<Vec<u8>, Error> {
        let response = self.http.get(url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}

pub struct Mediawiki {
    client: Client,
    baseapi: String,
}
impl Mediawiki {
    pub fn new(client: Client, baseapi: &str) -> Mediawiki {
        Mediawiki {
            client,
            baseapi: baseapi.to_owned(),
        }
    }
    pub fn request(&self) -> RequestBuilder<'_> {
        RequestBuilder {
            mw: self,
            args: vec![("format".to_owned(), "json".to_owned())],
        }
    }
}

pub struct RequestBuilder<'a> {
    mw: &'a Mediawiki,
    args: Vec<(String, String)>,
}
impl<'a> RequestBuilder<'a> {
    pub fn arg(&mut self, name: &str, value: &str) -> &mut Self {
        self.args.push((name.to_owned(), value.to_owned()));
        self
    }
    pub fn get(&self) -> Result<Json, Error> {
        let args: Vec<(&str, &str)> = self
            .args
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        let json: Json = self.mw.client.get_json(&self.mw.baseapi, &args)?;
        if json.get("error").is_some() {
            return Err(Error::Api(json));
        }
        Ok(json)
    }
}
