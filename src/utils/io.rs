//! Reading and writing VCH documents

use crate::Result;
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// On-disk encoding of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// YAML for `.yaml`/`.yml`, JSON otherwise.
    pub fn from_path(path: &Path) -> Self {
        if path
            .extension()
            .is_some_and(|e| e == "yaml" || e == "yml")
        {
            DocumentFormat::Yaml
        } else {
            DocumentFormat::Json
        }
    }
}

/// Parse a document from text.
pub fn parse_document<T: DeserializeOwned>(content: &str, format: DocumentFormat) -> Result<T> {
    let doc = match format {
        DocumentFormat::Json => serde_json::from_str(content)?,
        DocumentFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(doc)
}

/// Read and parse a document file.
pub fn load_document<T: DeserializeOwned>(path: &Path, format: DocumentFormat) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_document(&content, format).with_context(|| format!("failed to parse {}", path.display()))
}

/// Serialize `doc` as JSON to `output`, or to stdout when `output` is `None`.
pub fn write_document<T: Serialize>(doc: &T, output: Option<&Path>, pretty: bool) -> Result<()> {
    let mut text = if pretty {
        serde_json::to_string_pretty(doc)?
    } else {
        serde_json::to_string(doc)?
    };
    text.push('\n');

    match output {
        Some(path) => {
            let mut f = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            f.write_all(text.as_bytes())?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
