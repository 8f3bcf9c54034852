//! Where the CSV comes from.

use std::fmt;
use std::path::{Path, PathBuf};

use reqwest::blocking::Client;
use tracing::debug;

use crate::error::{PublishError, PublishResult};

/// Input location, decided by the identifier's scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A file on the local filesystem.
    Local(PathBuf),
    /// An `http://` or `https://` URL (including presigned object-store URLs).
    Remote(String),
}

impl Source {
    /// `http://` / `https://` prefixes select [`Source::Remote`]; anything else is a path.
    pub fn parse(identifier: &str) -> Self {
        if identifier.starts_with("http://") || identifier.starts_with("https://") {
            Self::Remote(identifier.to_owned())
        } else {
            Self::Local(PathBuf::from(identifier))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// Basename of the identifier, recorded as `source_filename` in run metadata.
    ///
    /// For URLs this is the last `/`-separated segment (query string included).
    pub fn file_name(&self) -> String {
        match self {
            Self::Local(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            Self::Remote(url) => url.rsplit('/').next().unwrap_or_default().to_owned(),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => f.write_str(url),
        }
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Self::Local(path.to_path_buf())
    }
}

/// Fetch the body of `url` with a blocking GET on a default client.
pub fn fetch_remote(url: &str) -> PublishResult<Vec<u8>> {
    let client = Client::builder()
        .build()
        .map_err(|e| PublishError::SourceUnavailable {
            source_id: url.to_owned(),
            message: e.to_string(),
        })?;
    fetch_remote_with_client(&client, url)
}

/// Fetch the body of `url` with a blocking GET on `client`.
///
/// Connection failures, timeouts (client default), non-success statuses and body read
/// errors are all [`PublishError::SourceUnavailable`].
pub fn fetch_remote_with_client(client: &Client, url: &str) -> PublishResult<Vec<u8>> {
    let unavailable = |e: reqwest::Error| PublishError::SourceUnavailable {
        source_id: url.to_owned(),
        message: e.to_string(),
    };

    let response = client
        .get(url)
        .send()
        .map_err(unavailable)?
        .error_for_status()
        .map_err(unavailable)?;
    let body = response.bytes().map_err(unavailable)?;
    debug!(url, bytes = body.len(), "fetched remote csv");
    Ok(body.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_selects_access_method() {
        assert_eq!(
            Source::parse("https://example.org/data/study.csv"),
            Source::Remote("https://example.org/data/study.csv".to_string())
        );
        assert!(Source::parse("http://localhost/x.csv").is_remote());
        assert_eq!(
            Source::parse("data/study.csv"),
            Source::Local(PathBuf::from("data/study.csv"))
        );
        // only the two HTTP schemes are remote
        assert!(!Source::parse("s3://bucket/key.csv").is_remote());
        assert!(!Source::parse("HTTP://upper.csv").is_remote());
    }

    #[test]
    fn file_name_is_the_basename() {
        assert_eq!(Source::parse("data/my_study_data.csv").file_name(), "my_study_data.csv");
        assert_eq!(Source::parse("https://example.org/a/b.csv").file_name(), "b.csv");
        assert_eq!(
            Source::parse("https://example.org/b.csv?sig=abc").file_name(),
            "b.csv?sig=abc"
        );
    }
}
