//! Decoding of the raw glossary file into term and edge records.

use std::path::Path;

use serde::Deserialize;

use crate::error::{GlossmapError, Result};

use super::{Edge, Term};

/// On-disk document shape. Both arrays are optional.
#[derive(Debug, Deserialize)]
struct GlossaryDoc {
    #[serde(default)]
    terms: Vec<Term>,
    #[serde(default)]
    edges: Vec<Edge>,
}

/// Read and decode the glossary file.
///
/// Records missing required fields (term id/title/definition, edge
/// id/source/target) fail decoding; this is the only place a load error can
/// originate. Dangling edge references are not rejected here, the store
/// tolerates them by exclusion.
pub fn load_glossary(path: &Path) -> Result<(Vec<Term>, Vec<Edge>)> {
    let raw = std::fs::read_to_string(path)?;
    let doc: GlossaryDoc = serde_json::from_str(&raw).map_err(|e| {
        GlossmapError::Parse(format!("invalid glossary data in {}: {}", path.display(), e))
    })?;

    warn_on_malformed_urls(&doc.terms);

    Ok((doc.terms, doc.edges))
}

/// Broken links in the hand-maintained data file are logged, never fatal.
fn warn_on_malformed_urls(terms: &[Term]) {
    for term in terms {
        for source in &term.sources {
            if source.url.is_empty() {
                continue;
            }
            if let Err(e) = url::Url::parse(&source.url) {
                log::warn!(
                    "term {}: source {:?} has malformed url {:?}: {}",
                    term.id,
                    source.title,
                    source.url,
                    e
                );
            }
        }
    }
}
