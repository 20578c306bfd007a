use std::path::PathBuf;
use clap::{command, Parser};
use crate::Config;

mod bench;
mod count;
mod extract;

#[derive(Parser)]
#[command(name = "wordster")]
#[command(about = "Extract cleaned text from PDF documents and count word occurrences", version = "1.0")]
pub enum Cli {
    /// Print the cleaned document text
    Extract {
        #[arg(help = "Path to the PDF file")]
        path: PathBuf,

        #[arg(long, help = "Skip the noise-line filter")]
        raw: bool,
    },

    /// Count occurrences of a word or phrase in the cleaned text
    Count {
        #[arg(help = "Path to the PDF file")]
        path: PathBuf,

        #[arg(help = "Word or phrase to count")]
        word: String,
    },

    /// Print the number of pages
    Pages {
        #[arg(help = "Path to the PDF file")]
        path: PathBuf,
    },

    /// Repeatedly count the configured word list and report timings
    Bench {
        #[arg(help = "Path to the PDF file")]
        path: PathBuf,
    },
}

pub fn handler(args: Cli, config: Config) -> anyhow::Result<()> {
    match args {
        Cli::Extract { path, raw } => extract::extract_document(path, raw),
        Cli::Count { path, word } => count::count_in_document(path, &word),
        Cli::Pages { path } => extract::show_page_count(path),
        Cli::Bench { path } => bench::run_bench(path, &config),
    }
}
