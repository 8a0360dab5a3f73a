use std::path::{Path, PathBuf};

/// Endpoints and output locations for both jobs.
#[derive(Debug, Clone)]
pub struct Config {
    pub useragent: String,
    /// Country directory listing; fields are passed as the `fields` argument.
    pub countries_api: String,
    /// Flag source, `{code}` is replaced with the lowercase country code.
    pub flag_url: String,
    pub flags_dir: PathBuf,
    pub sparql_endpoint: String,
    pub wiki_api: String,
    pub capitals_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            useragent: "flags-app/1.0".into(),
            countries_api: "https://restcountries.com/v3.1/all".into(),
            flag_url: "https://raw.githubusercontent.com/hjnilsson/country-flags/master/svg/{code}.svg"
                .into(),
            flags_dir: Path::new(env!("CARGO_MANIFEST_DIR")).join("flags"),
            sparql_endpoint: "https://query.wikidata.org/sparql".into(),
            wiki_api: "https://en.wikipedia.org/w/api.php".into(),
            capitals_path: PathBuf::from("capitals-ru.json"),
        }
    }
}

impl Config {
    pub fn flag_url_for(&self, code: &str) -> String {
        self.flag_url.replace("{code}", &code.to_lowercase())
    }
}
