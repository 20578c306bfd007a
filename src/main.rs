use clap::Parser;
use handler::Cli;
use serde::{Deserialize, Serialize};

mod counter;
mod document;
mod error;
mod handler;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = read_config()?;
    let args = Cli::parse();
    handler::handler(args, config)?;
    Ok(())
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Config {
    // Bench
    bench_rounds: u32,
    bench_words: Vec<String>,
}

fn read_config() -> anyhow::Result<Config> {
    Ok(config::Config::builder()
        .add_source(config::File::with_name("config"))
        .build()?
        .try_deserialize::<Config>()?)
}
