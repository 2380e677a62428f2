//! Batch fetcher: a bounded pool of workers that materializes every job
//! in the list and tallies the outcomes.

pub mod retry;
pub mod routine;

use futures::stream::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::manifest::Job;
use crate::utils::{files, http};

use retry::RetryPolicy;
use routine::FetchOutcome;

/// Result of one job, consumed only for the final tally.
#[derive(Debug)]
pub struct FetchResult {
    pub job: Job,
    pub outcome: FetchOutcome,
}

/// Outcome counters for a whole run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub fetched: usize,
    pub fetched_fallback: usize,
    pub placeholders: usize,
    pub failed: usize,
    pub skipped_existing: usize,
}

impl BatchSummary {
    /// Jobs that produced a file, placeholders included.
    pub fn succeeded(&self) -> usize {
        self.fetched + self.fetched_fallback + self.placeholders
    }

    /// Jobs that went through the fetch routine.
    pub fn attempted(&self) -> usize {
        self.succeeded() + self.failed
    }

    fn record(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Primary => self.fetched += 1,
            FetchOutcome::Fallback => self.fetched_fallback += 1,
            FetchOutcome::Placeholder => self.placeholders += 1,
            FetchOutcome::Failed => self.failed += 1,
        }
    }
}

/// Download every job into `output_dir` through a pool of `threads`
/// concurrent workers and return the outcome tally. A single job's
/// failure never aborts the batch.
pub async fn fetch_assets(
    jobs: Vec<Job>,
    output_dir: &Path,
    threads: usize,
    policy: &RetryPolicy,
    skip_existing: bool,
) -> io::Result<BatchSummary> {
    let threads = threads.max(1);
    std::fs::create_dir_all(output_dir)?;

    let mut summary = BatchSummary::default();

    let jobs = if skip_existing {
        let existing = files::batch_check_existing(output_dir, &jobs);
        let (skip, keep): (Vec<_>, Vec<_>) = jobs
            .into_iter()
            .partition(|job| *existing.get(&job.filename).unwrap_or(&false));
        summary.skipped_existing = skip.len();
        if summary.skipped_existing > 0 {
            println!(
                "Skipping {} assets that already exist",
                summary.skipped_existing
            );
        }
        keep
    } else {
        jobs
    };

    let total = jobs.len();
    println!("Downloading {} assets using {} threads", total, threads);

    if jobs.is_empty() {
        return Ok(summary);
    }

    let client = http::client().map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to build HTTP client: {}", e),
        )
    })?;

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )
            .unwrap()
            .progress_chars("#>-"),
    );

    let downloads = jobs.into_iter().map(|job| {
        let client = client.clone();
        let pb = pb.clone();
        async move {
            let outcome = routine::fetch_job(&client, &job, output_dir, policy, &pb).await;
            pb.inc(1);
            FetchResult { job, outcome }
        }
    });

    let semaphore = Arc::new(tokio::sync::Semaphore::new(threads));
    let results: Vec<FetchResult> = futures::stream::iter(downloads)
        .map(|download| {
            let semaphore = semaphore.clone();
            async move {
                let _permit = semaphore.acquire().await.unwrap();
                download.await
            }
        })
        .buffer_unordered(threads)
        .collect()
        .await;

    pb.finish_with_message("Download complete!");

    for result in &results {
        summary.record(result.outcome);
    }

    Ok(summary)
}
