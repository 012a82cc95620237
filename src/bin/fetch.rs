use std::io;

use paperfeed::{
    config::{self, ArxivConfig},
    model::PaperFeed,
    parser::ArxivParser,
    storage::LocalSaver,
};

#[tokio::main]
async fn main() -> io::Result<()> {
    println!("{}", "=".repeat(70));
    println!("arXiv Paper Feed Fetcher");
    println!("Topic: EHR + Transformer for Trajectory/Disease Prediction");
    println!("{}", "=".repeat(70));

    let config = ArxivConfig::default();
    println!("Fetching papers from arXiv API...");
    println!("Query: {}\n", config.search_query());

    let parser = ArxivParser::from_config(config);
    let papers = parser.get_arxiv_results().await;
    println!("Retrieved {} papers", papers.len());

    // a failed fetch still produces a valid (empty) document; only the
    // write below can end the run with an error.
    let feed = PaperFeed::new(papers);
    let output_path = config::default_output_path();
    LocalSaver::save_feed_as_json(&output_path, &feed)?;
    println!("Saved to: {}", output_path.display());

    println!("Done!");
    Ok(())
}
