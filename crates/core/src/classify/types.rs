//! Classification data model shared with the external classifier.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path};
use thiserror::Error;

/// One file of a torrent, as classified by the external collaborator.
///
/// Wire shape is externally tagged by a `"type"` field with camelCase
/// field names, matching the classifier's JSON output contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClassifiedFile {
    /// A standalone movie file.
    #[serde(rename_all = "camelCase")]
    Movie {
        /// Display title, used verbatim for the destination filename.
        title: String,
        /// Source path, relative to the torrent root.
        file_path: String,
        /// Classifier-asserted provenance flag. Carried for wire
        /// compatibility; placement keys on the original file list instead.
        #[serde(default)]
        not_part_of_torrent: bool,
    },
    /// A single episode of a TV series.
    #[serde(rename_all = "camelCase")]
    Series {
        /// Series display name, used as the library directory name.
        series_title: String,
        /// Season number, 1-based.
        season: u32,
        /// Episode number within the season, 1-based.
        episode: u32,
        /// Episode title when the classifier knows one.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        episode_title: Option<String>,
        /// Source path, relative to the torrent root.
        file_path: String,
        #[serde(default)]
        not_part_of_torrent: bool,
    },
}

impl ClassifiedFile {
    /// Source path of this entry, relative to the torrent root.
    pub fn file_path(&self) -> &str {
        match self {
            ClassifiedFile::Movie { file_path, .. } => file_path,
            ClassifiedFile::Series { file_path, .. } => file_path,
        }
    }

    /// Kind label for logging and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ClassifiedFile::Movie { .. } => "movie",
            ClassifiedFile::Series { .. } => "series",
        }
    }

    /// Check this entry against the input contract.
    ///
    /// Violations here mean the classifier broke its contract; they are
    /// surfaced before any placement happens, never folded into the
    /// per-file error list.
    pub fn validate(&self) -> Result<(), InvalidClassification> {
        validate_relative_path(self.file_path())?;
        if let ClassifiedFile::Series {
            season,
            episode,
            file_path,
            ..
        } = self
        {
            if *season == 0 {
                return Err(InvalidClassification::NonPositiveSeason {
                    path: file_path.clone(),
                });
            }
            if *episode == 0 {
                return Err(InvalidClassification::NonPositiveEpisode {
                    path: file_path.clone(),
                });
            }
        }
        Ok(())
    }
}

/// The classifier's complete answer for one torrent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Per-file classifications, in the classifier's order.
    pub files: Vec<ClassifiedFile>,
    /// One-line human description of the torrent contents.
    pub description: String,
    /// Single emoji summarizing the contents.
    pub icon: String,
}

impl Classification {
    /// Validate every entry, failing on the first contract violation.
    pub fn validate(&self) -> Result<(), InvalidClassification> {
        for file in &self.files {
            file.validate()?;
        }
        Ok(())
    }
}

/// Contract violation in a classification received from the collaborator.
#[derive(Debug, Error, PartialEq)]
pub enum InvalidClassification {
    #[error("Classified file path is empty")]
    EmptyPath,

    #[error("Classified file path is not relative to the torrent root: {path}")]
    AbsolutePath { path: String },

    #[error("Classified file path escapes the torrent root: {path}")]
    PathTraversal { path: String },

    #[error("Season must be positive: {path}")]
    NonPositiveSeason { path: String },

    #[error("Episode must be positive: {path}")]
    NonPositiveEpisode { path: String },
}

fn validate_relative_path(path: &str) -> Result<(), InvalidClassification> {
    if path.is_empty() {
        return Err(InvalidClassification::EmptyPath);
    }
    let p = Path::new(path);
    if p.is_absolute() {
        return Err(InvalidClassification::AbsolutePath {
            path: path.to_string(),
        });
    }
    if p.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(InvalidClassification::PathTraversal {
            path: path.to_string(),
        });
    }
    Ok(())
}
