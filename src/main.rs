use article_seo::parsers::ContentFormat;
use article_seo::{Analyzer, ArticleSchemaInput, SeoInput, apply_heading_ids, generate_slug};
use clap::Parser;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fs;
use std::path::Path;

mod args;
use args::{Args, Command};

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let analyzer = match &args.config {
        Some(path) => {
            ::log::info!("Loading configuration from {}", path.display());
            Analyzer::new().with_config_file(path)?
        }
        None => Analyzer::new(),
    };

    match args.command {
        Command::Score { input } => {
            let input: SeoInput = read_json(&input)?;
            let report = analyzer.report(&input);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Slug { text } => {
            println!("{}", generate_slug(&text));
        }
        Command::Toc { content } => {
            let content = read_content(&content)?;
            let toc = analyzer.table_of_contents(&content);
            println!("{}", serde_json::to_string_pretty(&toc)?);
        }
        Command::Anchors { content } => {
            let content = read_content(&content)?;
            let toc = analyzer.table_of_contents(&content);
            print!("{}", apply_heading_ids(&content, &toc));
        }
        Command::ReadingTime {
            content,
            text,
            words_per_minute,
        } => {
            let content = read_content(&content)?;
            let analyzer = match words_per_minute {
                Some(wpm) => analyzer.with_words_per_minute(wpm),
                None => analyzer,
            };
            let format = if text {
                ContentFormat::Text
            } else {
                ContentFormat::Html
            };
            println!("{}", analyzer.reading_time_as(&content, format));
        }
        Command::Schema { input } => {
            let input: ArticleSchemaInput = read_json(&input)?;
            println!("{}", serde_json::to_string_pretty(&analyzer.schema(&input))?);
        }
    }

    Ok(())
}

fn read_content(path: &Path) -> article_seo::Result<String> {
    ::log::debug!("Reading content from {}", path.display());
    Ok(fs::read_to_string(path)?)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> article_seo::Result<T> {
    let contents = read_content(path)?;
    Ok(serde_json::from_str(&contents)?)
}
