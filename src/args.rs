use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "article-seo")]
#[command(about = "SEO scoring and content analysis for blog articles")]
#[command(version)]
pub struct Args {
    /// Path to a JSON analyzer configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score an article given as editor JSON (title, metaTitle, content, ...)
    Score {
        /// Article JSON file
        input: PathBuf,
    },

    /// Print the URL slug for a title
    Slug {
        /// Title text
        text: String,
    },

    /// Print the table of contents of an HTML body as JSON
    Toc {
        /// HTML content file
        content: PathBuf,
    },

    /// Print an HTML body with anchor ids on its section headings
    Anchors {
        /// HTML content file
        content: PathBuf,
    },

    /// Print the reading time of an HTML body in minutes
    ReadingTime {
        /// HTML content file
        content: PathBuf,

        /// Treat the file as plain text instead of HTML
        #[arg(long)]
        text: bool,

        /// Override the configured reading speed
        #[arg(long)]
        words_per_minute: Option<u32>,
    },

    /// Print schema.org Article JSON-LD for article metadata
    Schema {
        /// Article metadata JSON file
        input: PathBuf,
    },
}
