//! GResource manifest loading.
//!
//! Only `<file>` elements below the root are consulted, at any depth; their
//! attributes and every other element are ignored.
use crate::error::{CheckError, ParseFailure};
use encoding_rs::{Encoding, UTF_8};
use roxmltree::{Document, Node, ParsingOptions};
use std::fs;
use std::path::Path;

const FILE_TAG: &str = "file";

/// How far into the file the XML declaration is searched for.
const DECLARATION_WINDOW: usize = 256;

/// Filenames referenced by a manifest, in document order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Manifest {
    pub files: Vec<String>,
    /// `<file>` elements with no usable text.
    pub skipped: usize,
}

/// Read and parse the manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<Manifest, CheckError> {
    if !path.exists() {
        return Err(CheckError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }
    let parse_error = |source: ParseFailure| CheckError::ManifestParse {
        path: path.to_path_buf(),
        source,
    };
    let bytes = fs::read(path).map_err(|err| parse_error(err.into()))?;
    let text = decode_manifest(&bytes).map_err(parse_error)?;
    parse_manifest(&text).map_err(|err| parse_error(err.into()))
}

/// Decode raw manifest bytes using the BOM, then the XML declaration, then UTF-8.
pub fn decode_manifest(bytes: &[u8]) -> Result<String, ParseFailure> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => {
            let encoding = match declared_encoding(bytes) {
                Some(label) => Encoding::for_label(label.as_bytes())
                    .ok_or(ParseFailure::UnknownEncoding(label))?,
                None => UTF_8,
            };
            (encoding, bytes)
        }
    };
    tracing::debug!(encoding = encoding.name(), "decoding manifest");
    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(|text| text.into_owned())
        .ok_or(ParseFailure::Malformed(encoding.name()))
}

/// The `encoding` pseudo-attribute of a leading `<?xml ... ?>` declaration.
fn declared_encoding(bytes: &[u8]) -> Option<String> {
    let window = &bytes[..bytes.len().min(DECLARATION_WINDOW)];
    if !window.starts_with(b"<?xml") {
        return None;
    }
    let end = window.windows(2).position(|pair| pair == b"?>")?;
    let declaration = std::str::from_utf8(&window[..end]).ok()?;
    let (_, rest) = declaration.split_once("encoding")?;
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &rest[1..];
    let (label, _) = value.split_once(quote)?;
    Some(label.trim().to_string())
}

/// Parse manifest XML and collect the `<file>` entries.
pub fn parse_manifest(text: &str) -> Result<Manifest, roxmltree::Error> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, options)?;

    let mut manifest = Manifest::default();
    // The root element itself is never a candidate, only what lies below it.
    for node in doc.root_element().descendants().skip(1).filter(is_file_element) {
        match leading_text(node) {
            Some(name) => {
                tracing::debug!(file = %name, "manifest entry");
                manifest.files.push(name);
            }
            None => manifest.skipped += 1,
        }
    }
    Ok(manifest)
}

fn is_file_element(node: &Node) -> bool {
    node.is_element()
        && node.tag_name().name() == FILE_TAG
        && node.tag_name().namespace().is_none()
}

/// Text preceding the first child element, trimmed; `None` when blank.
fn leading_text(node: Node) -> Option<String> {
    let raw: String = node
        .children()
        .take_while(|child| !child.is_element())
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
