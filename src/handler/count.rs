use std::path::PathBuf;

use log::info;

use crate::counter;
use crate::document::Document;

pub fn count_in_document(path: PathBuf, word: &str) -> anyhow::Result<()> {
    let doc = Document::load(&path)?;
    info!("loaded {} pages from {}", doc.page_count(), path.display());

    let text = doc.cleaned_text();
    let occurrences = counter::count_occurrences_in_text(word, &text);
    println!("{}", occurrences);
    Ok(())
}
