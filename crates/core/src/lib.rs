pub mod classify;
pub mod config;
pub mod download_client;
pub mod extract;
pub mod metrics;
pub mod notify;
pub mod organize;
pub mod pipeline;
pub mod report;
pub mod testing;

pub use classify::{
    Classification, ClassifiedFile, Classifier, ClassifyError, ClassifyRequest,
    InvalidClassification,
};
pub use config::{load_config, load_config_from_str, validate_config, Config, ConfigError};
pub use download_client::{DownloadClient, DownloadClientError, FinishedTorrent};
pub use extract::{ExtractError, ExtractionConfig, Extractor, UnrarExtractor};
pub use notify::{LogNotifier, Notifier, NotifyError};
pub use organize::{LibraryConfig, OrganizeResult, Organizer};
pub use pipeline::{PipelineConfig, PipelineError, PipelineReport, TorrentPipeline};
