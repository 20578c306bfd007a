use std::path::PathBuf;

use crate::document::Document;

pub fn extract_document(path: PathBuf, raw: bool) -> anyhow::Result<()> {
    let doc = Document::load(&path)?;
    let text = if raw { doc.raw_text() } else { doc.cleaned_text() };
    println!("{}", text);
    Ok(())
}

pub fn show_page_count(path: PathBuf) -> anyhow::Result<()> {
    let doc = Document::load(&path)?;
    println!("{}", doc.page_count());
    Ok(())
}
