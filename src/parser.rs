use quick_xml::de::from_str;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::config::{ArxivConfig, ARXIV_API_URL, FETCH_TIMEOUT};
use crate::model::Paper;

#[derive(Debug, Error)]
pub enum EntryError {
    #[error("entry is missing required field `{0}`")]
    MissingField(&'static str),
}

#[derive(Debug)]
pub struct ArxivParser {
    config: ArxivConfig,
    client: Client,
}

impl ArxivParser {
    pub fn from_config(config: ArxivConfig) -> Self {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("Failed to build http client");
        ArxivParser { config, client }
    }

    async fn get_raw_xml(&self) -> String {
        let params = [
            ("search_query", self.config.search_query()),
            ("start", String::from("0")),
            ("max_results", self.config.max_results.to_string()),
            ("sortBy", String::from("submittedDate")),
            ("sortOrder", String::from("descending")),
        ];
        let response = match self.client.get(ARXIV_API_URL).query(&params).send().await {
            Ok(response) => response,
            Err(e) => {
                eprintln!("Failed to fetch data: {}", e);
                return String::new();
            }
        };
        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                eprintln!("arXiv API returned an error status: {}", e);
                return String::new();
            }
        };
        match response.text().await {
            Ok(body) => body,
            Err(e) => {
                eprintln!("Failed to read response body: {}", e);
                String::new()
            }
        }
    }

    // one page of results, feed order preserved; never fails the whole run.
    pub async fn get_arxiv_results(&self) -> Vec<Paper> {
        let xml = self.get_raw_xml().await;
        parse_feed(&xml)
    }
}

pub fn parse_feed(xml: &str) -> Vec<Paper> {
    // a failed fetch hands over an empty body; nothing to parse then.
    if xml.is_empty() {
        return Vec::new();
    }
    let document: AtomFeed = match from_str(xml) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Failed to parse xml data: {}", e);
            AtomFeed::default()
        }
    };
    document
        .entries
        .into_iter()
        .filter_map(|entry| match entry.into_paper() {
            Ok(paper) => Some(paper),
            Err(e) => {
                eprintln!("Skipping entry: {}", e);
                None
            }
        })
        .collect()
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// Arxiv Raw XML Model

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct AtomFeed {
    #[serde(rename = "entry")]
    entries: Vec<AtomEntry>,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct AtomEntry {
    id: Option<String>,
    title: Option<String>,
    summary: Option<String>,
    published: Option<String>,
    updated: Option<String>,
    #[serde(rename = "author")]
    authors: Vec<AuthorField>,
    #[serde(rename = "category")]
    categories: Vec<CategoryField>,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct AuthorField {
    name: Option<String>,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct CategoryField {
    #[serde(rename = "@term")]
    term: Option<String>,
}

impl AtomEntry {
    fn into_paper(self) -> Result<Paper, EntryError> {
        let id_url = self.id.ok_or(EntryError::MissingField("id"))?;
        // the id element holds an abs URL, e.g. http://arxiv.org/abs/2301.00001v2.
        // version markers are stripped as plain substrings, matching the feed
        // generator downstream expects; an id with a literal "v1" inside
        // would lose it.
        let id = id_url
            .split("/abs/")
            .last()
            .unwrap_or(id_url.as_str())
            .replace("v1", "")
            .replace("v2", "")
            .replace("v3", "");

        let title = self.title.ok_or(EntryError::MissingField("title"))?;
        let abstract_text = self.summary.ok_or(EntryError::MissingField("summary"))?;

        let authors = self
            .authors
            .into_iter()
            .map(|author| author.name.ok_or(EntryError::MissingField("author/name")))
            .collect::<Result<Vec<_>, _>>()?;

        let published = self.published.ok_or(EntryError::MissingField("published"))?;
        let updated = self.updated.ok_or(EntryError::MissingField("updated"))?;

        let categories = self
            .categories
            .into_iter()
            .filter_map(|category| category.term)
            .collect();

        Ok(Paper {
            arxiv_url: format!("https://arxiv.org/abs/{}", id),
            pdf_url: format!("https://arxiv.org/pdf/{}.pdf", id),
            id,
            title: normalize_whitespace(&title),
            authors,
            abstract_text: normalize_whitespace(&abstract_text),
            published: date_portion(&published),
            updated: date_portion(&updated),
            categories,
        })
    }
}

// "2023-01-02T09:00:00Z" -> "2023-01-02"
fn date_portion(timestamp: &str) -> String {
    timestamp
        .split('T')
        .next()
        .unwrap_or(timestamp)
        .to_string()
}

// end Arxiv Raw XML Model
