//! Parsing of term collections from the command line and from JSON files.

use std::fs;
use std::path::Path;

use monorder_core::{Monomial, MonomialOrder};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while reading terms or precedences.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid exponent '{0}' (expected a non-negative integer)")]
    Exponent(String),

    #[error("invalid variable index '{0}' (expected a non-negative integer)")]
    Index(String),

    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed term file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A term file: either a bare array of exponent arrays or an object that can
/// also carry the precedence and ordering.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TermDocument {
    Bare(Vec<Monomial>),
    Full(TermFile),
}

/// Contents of a term file.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct TermFile {
    pub terms: Vec<Monomial>,
    #[serde(default)]
    pub precedence: Option<Vec<usize>>,
    #[serde(default)]
    pub order: Option<MonomialOrder>,
}

fn split_list(s: &str) -> impl Iterator<Item = &str> {
    s.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
}

/// Parses `2,8,0` (brackets optional) into a monomial.
pub fn parse_term(s: &str) -> Result<Monomial, InputError> {
    let exps = split_list(s)
        .map(|part| {
            part.parse::<u32>()
                .map_err(|_| InputError::Exponent(part.to_string()))
        })
        .collect::<Result<Vec<u32>, _>>()?;
    Ok(Monomial::from(exps))
}

/// Parses `2,1,0` into raw precedence indices. Validation happens when the
/// precedence is built.
pub fn parse_indices(s: &str) -> Result<Vec<usize>, InputError> {
    split_list(s)
        .map(|part| {
            part.parse::<usize>()
                .map_err(|_| InputError::Index(part.to_string()))
        })
        .collect()
}

/// Parses term-file JSON.
pub fn parse_term_json(json: &str, path: &str) -> Result<TermFile, InputError> {
    let doc: TermDocument = serde_json::from_str(json).map_err(|source| InputError::Json {
        path: path.to_string(),
        source,
    })?;
    Ok(match doc {
        TermDocument::Bare(terms) => TermFile {
            terms,
            ..TermFile::default()
        },
        TermDocument::Full(file) => file,
    })
}

/// Loads a term file from disk.
pub fn load_term_file(path: &Path) -> Result<TermFile, InputError> {
    let display = path.display().to_string();
    let json = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: display.clone(),
        source,
    })?;
    parse_term_json(&json, &display)
}
