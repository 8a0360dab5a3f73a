use crate::country::fetch_countries;
use crate::{Client, Config, Error};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub saved: usize,
    /// Already on disk, or the record had no code.
    pub skipped: usize,
    pub failed: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "saved {} skipped {} failed {}",
            self.saved, self.skipped, self.failed
        )
    }
}

/// Download `<CODE>.svg` for every listed country into `config.flags_dir`.
/// Only the directory listing is fatal; per-flag failures are counted and logged.
pub fn download_flags(client: &Client, config: &Config) -> Result<Summary, Error> {
    fs::create_dir_all(&config.flags_dir)?;
    let countries = fetch_countries(client, &config.countries_api, "cca2")?;
    let mut summary = Summary::default();
    for country in &countries {
        let code = match country.code() {
            Some(code) => code,
            None => {
                summary.skipped += 1;
                continue;
            }
        };
        let path = config.flags_dir.join(format!("{}.svg", code));
        if path.exists() {
            debug!(%code, "already present");
            summary.skipped += 1;
            continue;
        }
        let url = config.flag_url_for(code.as_str());
        match download(client, &url, &path) {
            Ok(()) => summary.saved += 1,
            Err(e) => {
                summary.failed += 1;
                discard(&path);
                warn!(%code, %url, "failed: {}", e);
            }
        }
    }
    Ok(summary)
}

/// An empty payload is `Error::EmptyBody`; nothing is written then.
pub fn download(client: &Client, url: &str, path: &Path) -> Result<(), Error> {
    let data = client.get_bytes(url)?;
    if data.is_empty() {
        return Err(Error::EmptyBody(url.to_owned()));
    }
    fs::write(path, &data)?;
    Ok(())
}

fn discard(path: &Path) {
    if path.exists() {
        if let Err(e) = fs::remove_file(path) {
            warn!(path = %path.display(), "could not remove partial file: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line() {
        let summary = Summary {
            saved: 3,
            skipped: 2,
            failed: 1,
        };
        assert_eq!(summary.to_string(), "saved 3 skipped 2 failed 1");
    }

    #[test]
    fn discard_removes_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("FR.svg");
        fs::write(&path, b"<sv").unwrap();
        discard(&path);
        assert!(!path.exists());
        discard(&path);
    }
}
