//! Link detection in message text.

use once_cell::sync::Lazy;
use regex::Regex;

static LINK: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"https?://\S+").ok());

/// Message text split into its prose and the links it carried.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkExtract {
    /// Text left once links are cut out, trimmed.
    pub text: String,
    /// Links in order of appearance.
    pub links: Vec<String>,
}

impl LinkExtract {
    /// Renders the text in bold with the links on their own lines below it,
    /// so the platform still previews them.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut rendered = String::new();
        if !self.text.is_empty() {
            rendered.push_str("**");
            rendered.push_str(&self.text);
            rendered.push_str("**");
        }
        if !self.text.is_empty() && !self.links.is_empty() {
            rendered.push('\n');
        }
        rendered.push_str(&self.links.join("\n"));
        rendered
    }
}

/// Splits `text` into prose and `http(s)` links.
#[must_use]
pub fn extract_links(text: &str) -> LinkExtract {
    let Some(pattern) = LINK.as_ref() else {
        return LinkExtract {
            text: text.trim().to_owned(),
            links: Vec::new(),
        };
    };

    LinkExtract {
        text: pattern.replace_all(text, "").trim().to_owned(),
        links: pattern
            .find_iter(text)
            .map(|found| found.as_str().to_owned())
            .collect(),
    }
}

/// Whether `text` is exactly one link and nothing else.
#[must_use]
pub fn is_single_link(text: &str) -> bool {
    LINK.as_ref()
        .and_then(|pattern| pattern.find(text))
        .is_some_and(|found| found.start() == 0 && found.end() == text.len())
}
