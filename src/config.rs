use std::path::PathBuf;
use std::time::Duration;

pub const ARXIV_API_URL: &str = "http://export.arxiv.org/api/query";
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

// papers.json lands next to the crate, mirroring the site layout it feeds.
const OUTPUT_RELATIVE: &str = "arxiv/papers.json";

#[derive(Debug)]
pub struct ArxivConfig {
    pub max_results: i32,
    pub query_groups: Vec<Vec<String>>,
}

#[allow(dead_code)]
impl ArxivConfig {
    pub fn default() -> Self {
        ArxivConfig {
            max_results: 50,
            query_groups: vec![
                vec![
                    String::from("EHR"),
                    String::from("electronic health record"),
                    String::from("clinical record"),
                ],
                vec![
                    String::from("trajectory"),
                    String::from("disease progression"),
                    String::from("risk prediction"),
                    String::from("outcome prediction"),
                    String::from("sequential prediction"),
                ],
                vec![
                    String::from("transformer"),
                    String::from("attention"),
                    String::from("foundation model"),
                    String::from("LLM"),
                ],
            ],
        }
    }

    pub fn new(max_results: i32, query_groups: Vec<Vec<String>>) -> Self {
        ArxivConfig {
            max_results,
            query_groups,
        }
    }

    // terms OR'd within a group, groups AND'd together.
    pub fn search_query(&self) -> String {
        self.query_groups
            .iter()
            .map(|group| {
                let terms = group
                    .iter()
                    .map(|term| format!("all:\"{}\"", term))
                    .collect::<Vec<_>>()
                    .join(" OR ");
                format!("({})", terms)
            })
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}

pub fn default_output_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(OUTPUT_RELATIVE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_grouping() {
        let config = ArxivConfig::new(
            10,
            vec![
                vec![String::from("EHR"), String::from("clinical record")],
                vec![String::from("transformer")],
            ],
        );
        assert_eq!(
            config.search_query(),
            "(all:\"EHR\" OR all:\"clinical record\") AND (all:\"transformer\")"
        );
    }

    #[test]
    fn test_default_query_has_three_groups() {
        let query = ArxivConfig::default().search_query();
        assert_eq!(query.matches(" AND ").count(), 2);
        assert!(query.starts_with("(all:\"EHR\""));
        assert!(query.contains("all:\"LLM\""));
    }
}
