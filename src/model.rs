use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

// the shape written to papers.json and read back by the site.

#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct Paper {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    // `abstract` is reserved in Rust, keep the JSON key
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub published: String,
    pub updated: String,
    pub categories: Vec<String>,
    pub arxiv_url: String,
    pub pdf_url: String,
}

#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct PaperFeed {
    pub generated_at: String,
    pub papers: Vec<Paper>,
}

impl PaperFeed {
    pub fn new(papers: Vec<Paper>) -> Self {
        PaperFeed {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            papers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_at_is_utc_with_z() {
        let feed = PaperFeed::new(Vec::new());
        assert!(feed.generated_at.ends_with('Z'));
        assert!(feed.generated_at.contains('T'));
        assert!(feed.papers.is_empty());
    }
}
