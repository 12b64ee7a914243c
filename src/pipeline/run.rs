// src/pipeline/run.rs

//! One fetch → parse → persist → notify cycle.

use std::path::PathBuf;

use crate::error::Result;
use crate::models::{GroupedAnnouncements, Snapshot};
use crate::services::{
    AnnouncementSource, DeliveryStatus, Notifier, format_message, group_and_sort, normalize_lines,
};
use crate::storage::SnapshotStorage;
use crate::utils::log;

use super::stage::{RunOutcome, Stage};

/// Options for a single run.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Log the message instead of delivering it
    pub dry_run: bool,
}

/// What a run did.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcome: RunOutcome,

    /// Persisted snapshot, if the run got that far
    pub snapshot: Option<Snapshot>,

    /// Location of the persisted snapshot
    pub snapshot_path: Option<PathBuf>,

    /// Rendered message
    pub message: Option<String>,

    /// `None` when delivery was not attempted (failed run or dry run)
    pub delivery: Option<DeliveryStatus>,
}

impl RunReport {
    fn failed(stage: Stage) -> Self {
        Self {
            outcome: RunOutcome::Failed(stage),
            snapshot: None,
            snapshot_path: None,
            message: None,
            delivery: None,
        }
    }

    pub fn grouped(&self) -> Option<&GroupedAnnouncements> {
        self.snapshot.as_ref().map(|s| &s.data)
    }
}

/// Run the full check pipeline.
///
/// An empty or failed fetch ends the run with [`RunOutcome::Failed`] before
/// anything is written or sent. Delivery problems are logged and leave the
/// outcome at [`RunOutcome::Done`]. Errors from the storage backend are
/// returned as-is.
pub async fn run_pipeline(
    source: &dyn AnnouncementSource,
    storage: &dyn SnapshotStorage,
    notifier: &dyn Notifier,
    options: &PipelineOptions,
) -> Result<RunReport> {
    log::header("Kyuko check starting");

    enter(Stage::Fetching);
    let raw = match source.fetch_text().await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            ::log::error!("Announcement block is missing or empty");
            return Ok(RunReport::failed(Stage::Fetching));
        }
        Err(e) => {
            ::log::error!("Failed to fetch announcement: {}", e);
            return Ok(RunReport::failed(Stage::Fetching));
        }
    };
    log::sub_item(&format!("{} characters fetched", raw.chars().count()));

    enter(Stage::Normalizing);
    let lines = normalize_lines(&raw);
    log::sub_item(&format!("{} dated lines", lines.len()));

    enter(Stage::Grouping);
    let grouped = group_and_sort(lines);
    log::sub_item(&format!("{} dates", grouped.len()));

    enter(Stage::Persisting);
    let snapshot = Snapshot::new(grouped);
    let snapshot_path = storage.save(&snapshot).await?;

    enter(Stage::Formatting);
    let message = format_message(&snapshot.data);

    enter(Stage::Delivering);
    let delivery = if options.dry_run {
        log::sub_item("Dry run, message not sent:");
        for line in message.lines() {
            log::sub_item(line);
        }
        None
    } else {
        Some(deliver(notifier, &message).await)
    };

    log::success("Check complete");

    Ok(RunReport {
        outcome: RunOutcome::Done,
        snapshot: Some(snapshot),
        snapshot_path: Some(snapshot_path),
        message: Some(message),
        delivery,
    })
}

/// Send the message; transport errors become [`DeliveryStatus::Failed`].
async fn deliver(notifier: &dyn Notifier, message: &str) -> DeliveryStatus {
    match notifier.send(message).await {
        Ok(status) => status,
        Err(e) => {
            ::log::warn!("LINE notification failed: {}", e);
            DeliveryStatus::Failed {
                reason: e.to_string(),
            }
        }
    }
}

fn enter(stage: Stage) {
    if let Some(step) = stage.step() {
        log::step(step, Stage::WORK.len(), stage);
    }
}
