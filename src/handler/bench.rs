use std::path::PathBuf;
use std::time::Instant;

use log::info;

use crate::counter::PatternCache;
use crate::document::Document;
use crate::Config;

pub fn run_bench(path: PathBuf, config: &Config) -> anyhow::Result<()> {
    let doc = Document::load(&path)?;
    let text = doc.cleaned_text();
    info!(
        "benching {} words over {} rounds against {} pages",
        config.bench_words.len(),
        config.bench_rounds,
        doc.page_count()
    );

    let mut cache = PatternCache::default();
    let start = Instant::now();
    let mut total = 0usize;
    for _ in 0..config.bench_rounds {
        for word in &config.bench_words {
            total += cache.count(word, &text);
        }
    }
    let elapsed = start.elapsed();

    println!(
        "{} occurrences across {} rounds in {:.3}s",
        total,
        config.bench_rounds,
        elapsed.as_secs_f64()
    );
    Ok(())
}
