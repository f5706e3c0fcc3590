//! Plain-text report rendering for torrent runs.
//!
//! Everything here emits plain, unescaped text; transports with markup
//! rules (Telegram and friends) escape on their side of the seam.

use crate::classify::{Classification, ClassifiedFile};
use crate::organize::OrganizeResult;
use crate::report::ranges::consolidate;

/// Notice sent when a torrent finishes downloading, before classification.
pub fn format_finished(torrent_name: &str) -> String {
    [
        "📥 Torrent finished",
        torrent_name,
        "",
        "🤖 Using AI to classify files...",
    ]
    .join("\n")
}

/// Notice sent when the classifier fails and the run is abandoned.
pub fn format_classification_failed(torrent_name: &str) -> String {
    [
        "❌ Classification failed",
        torrent_name,
        "",
        "⚠️ Torrent left in download directory",
    ]
    .join("\n")
}

/// Render the full summary of an organize run.
///
/// Series groups come first, in first-seen order (seasons first-seen within
/// a series, episodes consolidated into runs), then movies in encounter
/// order. The summary lists only non-zero buckets, in fixed order; the
/// trailing line states whether the torrent advanced to seeding.
pub fn format_organized(
    torrent_name: &str,
    classification: &Classification,
    result: &OrganizeResult,
    advanced: bool,
) -> String {
    let mut lines: Vec<String> = vec![
        "📥 Torrent organized".to_string(),
        torrent_name.to_string(),
        String::new(),
    ];

    if !classification.description.is_empty() {
        if classification.icon.is_empty() {
            lines.push(classification.description.clone());
        } else {
            lines.push(format!(
                "{} {}",
                classification.icon, classification.description
            ));
        }
        lines.push(String::new());
    }

    for group in collect_series_groups(&classification.files) {
        lines.push(format!("📺 {}", group.title));
        for season in &group.seasons {
            lines.push(format!(
                "- Season {} Episode {}",
                season.season,
                consolidate(&season.episodes).join(", ")
            ));
        }
        lines.push(String::new());
    }

    let mut any_movies = false;
    for file in &classification.files {
        if let ClassifiedFile::Movie { title, .. } = file {
            lines.push(format!("🎬 {}", title));
            any_movies = true;
        }
    }
    if any_movies {
        lines.push(String::new());
    }

    if !result.linked.is_empty() {
        lines.push(format!("♻️ Linked: {} files", result.linked.len()));
    }
    if !result.moved.is_empty() {
        lines.push(format!("🗂️ Moved: {} files", result.moved.len()));
    }
    if !result.exists.is_empty() {
        lines.push(format!(
            "⚠️ Skipped: {} files (already exist)",
            result.exists.len()
        ));
    }
    if !result.errors.is_empty() {
        lines.push(format!("❌ Errors: {} files", result.errors.len()));
        for failure in &result.errors {
            lines.push(format!("- {}", failure.error));
        }
    }
    lines.push(String::new());

    lines.push(
        if advanced {
            "🗄️ Torrent moved to seeding directory"
        } else {
            "⚠️ Torrent left in download directory"
        }
        .to_string(),
    );

    squash_blank_runs(&lines.join("\n"))
}

struct SeriesGroup<'a> {
    title: &'a str,
    seasons: Vec<SeasonGroup>,
}

struct SeasonGroup {
    season: u32,
    episodes: Vec<u32>,
}

/// Group series entries by title, then season, both in first-seen order.
fn collect_series_groups(files: &[ClassifiedFile]) -> Vec<SeriesGroup<'_>> {
    let mut groups: Vec<SeriesGroup> = Vec::new();
    for file in files {
        if let ClassifiedFile::Series {
            series_title,
            season,
            episode,
            ..
        } = file
        {
            let group_idx = match groups.iter().position(|g| g.title == series_title) {
                Some(idx) => idx,
                None => {
                    groups.push(SeriesGroup {
                        title: series_title,
                        seasons: Vec::new(),
                    });
                    groups.len() - 1
                }
            };
            let group = &mut groups[group_idx];
            let season_idx = match group.seasons.iter().position(|s| s.season == *season) {
                Some(idx) => idx,
                None => {
                    group.seasons.push(SeasonGroup {
                        season: *season,
                        episodes: Vec::new(),
                    });
                    group.seasons.len() - 1
                }
            };
            group.seasons[season_idx].episodes.push(*episode);
        }
    }
    groups
}

/// Collapse every run of blank lines to a single blank line and trim.
fn squash_blank_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut newlines = 0;
    for ch in text.chars() {
        if ch == '\n' {
            newlines += 1;
            if newlines <= 2 {
                out.push(ch);
            }
        } else {
            newlines = 0;
            out.push(ch);
        }
    }
    out.trim().to_string()
}
