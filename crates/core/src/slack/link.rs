use url::Url;

use super::{Result, SlackError};

/// A changed file paired with the shared link that opens it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLink {
    filepath: String,
    shared_link: String,
}

impl FileLink {
    /// Creates a file link, rejecting anything that is not an absolute http(s) URL.
    pub fn new(filepath: impl Into<String>, shared_link: impl Into<String>) -> Result<Self> {
        let shared_link = shared_link.into();

        let valid = Url::parse(&shared_link)
            .map(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
            .unwrap_or(false);

        if !valid {
            return Err(SlackError::InvalidLink(shared_link));
        }

        Ok(Self {
            filepath: filepath.into(),
            shared_link,
        })
    }

    pub fn filepath(&self) -> &str {
        &self.filepath
    }

    pub fn shared_link(&self) -> &str {
        &self.shared_link
    }

    /// Slack link markup: `<url|label>`.
    pub fn to_markup(&self) -> String {
        format!("<{}|{}>", self.shared_link, self.filepath)
    }
}
