use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use polib::po_file;

use crate::core::catalog::{Catalog, TranslationEntry};

/// Header fields `polib` needs to build the catalog metadata.
const REQUIRED_HEADERS: &[&str] = &[
    "Project-Id-Version",
    "POT-Creation-Date",
    "PO-Revision-Date",
    "Language-Team",
    "MIME-Version",
    "Content-Type",
    "Content-Transfer-Encoding",
    "Language",
    "Plural-Forms",
];

/// Parses a `.po` file into the catalog of its empty-context bucket.
///
/// Entries carrying a `msgctxt` are skipped, as is the header entry. A file
/// whose header lacks one of [`REQUIRED_HEADERS`] is rejected before parsing.
pub fn parse_po_file(path: &Path) -> Result<Catalog> {
    if !path.is_file() {
        bail!("Catalog file '{}' does not exist.", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    let missing = missing_headers(&content);
    if !missing.is_empty() {
        bail!(
            "Catalog file '{}' is missing header field(s): {}",
            path.display(),
            missing.join(", ")
        );
    }

    let po = po_file::parse(path)
        .with_context(|| format!("Failed to parse PO file: {:?}", path))?;

    let mut catalog = Catalog::default();
    for message in po.messages() {
        if !message.msgctxt().is_empty() || message.msgid().is_empty() {
            continue;
        }

        let forms = if message.is_plural() {
            message
                .msgstr_plural()
                .map(|forms| forms.to_vec())
                .unwrap_or_default()
        } else {
            message
                .msgstr()
                .map(|form| vec![form.to_string()])
                .unwrap_or_default()
        };

        catalog.insert(message.msgid(), TranslationEntry::new(forms));
    }

    Ok(catalog)
}

fn missing_headers(content: &str) -> Vec<&'static str> {
    let header = header_entry(content).unwrap_or_default();
    let present: Vec<&str> = header
        .split("\\n")
        .filter_map(|field| field.split_once(':'))
        .map(|(key, _)| key.trim())
        .collect();

    REQUIRED_HEADERS
        .iter()
        .copied()
        .filter(|key| !present.contains(key))
        .collect()
}

/// The `msgstr` of the leading `msgid ""` entry, continuation lines joined.
fn header_entry(content: &str) -> Option<String> {
    let mut lines = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));

    if lines.next()? != r#"msgid """# {
        return None;
    }
    let mut header = unquote(lines.next()?.strip_prefix("msgstr ")?)?.to_string();
    for line in lines {
        match unquote(line) {
            Some(part) => header.push_str(part),
            None => break,
        }
    }
    Some(header)
}

fn unquote(line: &str) -> Option<&str> {
    line.strip_prefix('"')?.strip_suffix('"')
}
