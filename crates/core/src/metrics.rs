//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Pipeline (torrents processed, lifecycle advancement)
//! - Organizer (per-file outcomes, run duration)
//! - Collaborators (extraction, notification delivery)

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

// =============================================================================
// Pipeline Metrics
// =============================================================================

/// Torrents processed total by result.
pub static TORRENTS_PROCESSED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "tidyseed_torrents_processed_total",
            "Total torrents processed",
        ),
        &["result"], // "organized", "classify_failed", "invalid_classification", "client_error"
    )
    .unwrap()
});

/// Torrents advanced to the seeding phase.
pub static LIFECYCLE_ADVANCED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "tidyseed_lifecycle_advanced_total",
        "Total torrents advanced to seeding after a clean organize run",
    )
    .unwrap()
});

// =============================================================================
// Organizer Metrics
// =============================================================================

/// Files organized total by outcome.
pub static FILES_ORGANIZED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("tidyseed_files_organized_total", "Total files organized"),
        &["outcome"], // "linked", "moved", "exists", "error"
    )
    .unwrap()
});

/// Organize run duration in seconds.
pub static ORGANIZE_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "tidyseed_organize_duration_seconds",
            "Duration of organize runs",
        )
        .buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 15.0, 60.0]),
        &[],
    )
    .unwrap()
});

// =============================================================================
// Collaborator Metrics
// =============================================================================

/// Archive extractions total by result.
pub static EXTRACTIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("tidyseed_extractions_total", "Total archive extractions"),
        &["result"], // "ok", "failed"
    )
    .unwrap()
});

/// Notification deliveries total by result.
pub static NOTIFICATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "tidyseed_notifications_total",
            "Total notification deliveries",
        ),
        &["result"], // "ok", "failed"
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        // Pipeline
        Box::new(TORRENTS_PROCESSED.clone()),
        Box::new(LIFECYCLE_ADVANCED.clone()),
        // Organizer
        Box::new(FILES_ORGANIZED.clone()),
        Box::new(ORGANIZE_DURATION.clone()),
        // Collaborators
        Box::new(EXTRACTIONS_TOTAL.clone()),
        Box::new(NOTIFICATIONS_TOTAL.clone()),
    ]
}
