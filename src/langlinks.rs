use crate::{Error, Json, Mediawiki};

/// Outcome of a cross-language lookup that reached the wiki.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Langlink {
    Found(String),
    Missing,
}

pub trait Langlinks {
    /// Title of the `lang` article linked from the page titled exactly `title`.
    fn langlink(&self, title: &str, lang: &str) -> Result<Langlink, Error>;
}

impl Langlinks for Mediawiki {
    fn langlink(&self, title: &str, lang: &str) -> Result<Langlink, Error> {
        let mut request = self.request();
        request.arg("action", "query");
        request.arg("prop", "langlinks");
        request.arg("lllang", lang);
        request.arg("titles", title);
        let json = request.get()?;
        Ok(first_langlink(&json))
    }
}

/// First non-empty linked title in a `prop=langlinks` response.
/// `query.pages` is an object keyed by page id in format version 1 and an array in version 2.
pub fn first_langlink(json: &Json) -> Langlink {
    let pages: Vec<&Json> = match &json["query"]["pages"] {
        Json::Object(pages) => pages.values().collect(),
        Json::Array(pages) => pages.iter().collect(),
        _ => return Langlink::Missing,
    };
    pages
        .into_iter()
        .filter_map(|page| page["langlinks"].as_array())
        .flatten()
        .filter_map(|link| link["*"].as_str().or_else(|| link["title"].as_str()))
        .find(|title| !title.is_empty())
        .map(|title| Langlink::Found(title.to_owned()))
        .unwrap_or(Langlink::Missing)
}
