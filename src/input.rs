use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

use crate::error::{AnalyzerError, Result};
use crate::{Campaign, InsightRecord};

// Bare array, or the Graph API page envelope `{"data": [...], "paging": {...}}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Rows<T> {
    Bare(Vec<T>),
    Envelope { data: Vec<T> },
}

impl<T> Rows<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Rows::Bare(rows) => rows,
            Rows::Envelope { data } => data,
        }
    }
}

pub fn parse_rows<T: DeserializeOwned>(payload: &str) -> serde_json::Result<Vec<T>> {
    serde_json::from_str::<Rows<T>>(payload).map(Rows::into_vec)
}

fn load_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let payload = std::fs::read_to_string(path).map_err(|source| AnalyzerError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_rows(&payload).map_err(|source| AnalyzerError::InputParse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_campaigns(path: &Path) -> Result<Vec<Campaign>> {
    load_rows(path)
}

pub fn load_insights(path: &Path) -> Result<Vec<InsightRecord>> {
    load_rows(path)
}
