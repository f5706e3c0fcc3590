//! Classification data model and the classifier seam.
//!
//! Classification itself is an external collaborator: something out there
//! looks at a torrent's file listing and decides which files are movies and
//! which are TV episodes. This module owns the wire contract for its answer
//! ([`ClassifiedFile`], [`Classification`]), the contract checks that guard
//! the rest of the engine from malformed answers, and the [`Classifier`]
//! trait the pipeline calls through.

mod error;
mod traits;
mod types;

pub use error::ClassifyError;
pub use traits::{Classifier, ClassifyRequest};
pub use types::{Classification, ClassifiedFile, InvalidClassification};
