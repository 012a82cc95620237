use std::{fs, io, path::Path};

use crate::model::PaperFeed;

// Utils to store the result document on local disk.
pub struct LocalSaver;

impl LocalSaver {
    // full overwrite; the document is assembled in memory before the single write.
    pub fn save_feed_as_json(path: &Path, feed: &PaperFeed) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(feed)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paper;
    use tempfile::tempdir;

    fn sample_feed() -> PaperFeed {
        PaperFeed::new(vec![Paper {
            id: String::from("2301.00001"),
            title: String::from("Foo Bar Baz"),
            authors: vec![String::from("Bob Müller")],
            abstract_text: String::from("Résumé of the paper."),
            published: String::from("2023-01-02"),
            updated: String::from("2023-01-05"),
            categories: vec![String::from("cs.LG")],
            arxiv_url: String::from("https://arxiv.org/abs/2301.00001"),
            pdf_url: String::from("https://arxiv.org/pdf/2301.00001.pdf"),
        }])
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("arxiv").join("papers.json");
        let feed = sample_feed();

        LocalSaver::save_feed_as_json(&path, &feed).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let read_back: PaperFeed = serde_json::from_str(&written).unwrap();
        assert_eq!(read_back, feed);
    }

    #[test]
    fn test_non_ascii_kept_literal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("papers.json");

        LocalSaver::save_feed_as_json(&path, &sample_feed()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Bob Müller"));
        assert!(written.contains("Résumé"));
        assert!(!written.contains("\\u"));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("papers.json");
        fs::write(&path, "stale contents").unwrap();

        let feed = PaperFeed::new(Vec::new());
        LocalSaver::save_feed_as_json(&path, &feed).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains("stale"));
        let read_back: PaperFeed = serde_json::from_str(&written).unwrap();
        assert!(read_back.papers.is_empty());
    }

    #[test]
    fn test_json_uses_expected_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("papers.json");

        LocalSaver::save_feed_as_json(&path, &sample_feed()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"generated_at\""));
        assert!(written.contains("\"abstract\""));
        assert!(!written.contains("abstract_text"));
    }
}
