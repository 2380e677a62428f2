//! Per-job fetch routine: primary source with retry, then the fallback
//! source, then the generated placeholder.

use indicatif::ProgressBar;
use reqwest::Client;
use std::path::Path;

use crate::manifest::Job;
use crate::placeholder;
use crate::utils::http;

use super::retry::{FetchError, RetryDecision, RetryPolicy};

/// Phases of a single job, in the order they are attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Primary,
    Fallback,
    Placeholder,
}

/// How a job ended up satisfied, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Fetched from the primary URL.
    Primary,
    /// Fetched from the fallback URL.
    Fallback,
    /// All sources failed; the generated placeholder was written instead.
    Placeholder,
    /// Nothing could be written for this job.
    Failed,
}

impl FetchOutcome {
    /// Whether the job counts as a success in the final tally.
    /// A written placeholder does count.
    pub fn succeeded(&self) -> bool {
        !matches!(self, FetchOutcome::Failed)
    }
}

/// Run one job to completion through its phases. Every failure degrades
/// to the next phase or to `FetchOutcome::Failed`; nothing escapes to
/// the caller as an error.
pub async fn fetch_job(
    client: &Client,
    job: &Job,
    output_dir: &Path,
    policy: &RetryPolicy,
    pb: &ProgressBar,
) -> FetchOutcome {
    let dest = output_dir.join(&job.filename);
    let mut phase = Phase::Primary;

    loop {
        phase = match phase {
            Phase::Primary => {
                match fetch_with_retry(client, &job.url, &dest, policy, &job.filename, pb).await {
                    Ok(()) => return FetchOutcome::Primary,
                    // Retry exhausted or write error: move to the next source.
                    Err(_) if job.fallback_url.is_some() => Phase::Fallback,
                    Err(_) => Phase::Placeholder,
                }
            }
            Phase::Fallback => match &job.fallback_url {
                Some(url) => {
                    pb.println(format!("Trying fallback for {}: {}", job.filename, url));
                    match http::download_to_file(client, url, &dest).await {
                        Ok(()) => {
                            pb.println(format!("Saved {} from fallback {}", job.filename, url));
                            return FetchOutcome::Fallback;
                        }
                        Err(e) => {
                            pb.println(format!(
                                "Fallback failed for {} ({}): {}",
                                job.filename, url, e
                            ));
                            Phase::Placeholder
                        }
                    }
                }
                None => Phase::Placeholder,
            },
            Phase::Placeholder => match placeholder::write_placeholder(&dest) {
                Ok(path) => {
                    pb.println(format!(
                        "Wrote placeholder for {}: {}",
                        job.filename,
                        path.display()
                    ));
                    return FetchOutcome::Placeholder;
                }
                Err(e) => {
                    pb.println(format!(
                        "Could not write placeholder for {}: {}",
                        job.filename, e
                    ));
                    return FetchOutcome::Failed;
                }
            },
        };
    }
}

/// GET `url` into `dest`, retrying failed attempts per `policy`.
async fn fetch_with_retry(
    client: &Client,
    url: &str,
    dest: &Path,
    policy: &RetryPolicy,
    filename: &str,
    pb: &ProgressBar,
) -> Result<(), FetchError> {
    let mut attempt = 1u32;
    loop {
        match http::download_to_file(client, url, dest).await {
            Ok(()) => {
                pb.println(format!("Saved {} from {} (attempt {})", filename, url, attempt));
                return Ok(());
            }
            Err(e) => {
                pb.println(format!(
                    "Attempt {}/{} failed for {} ({}): {}",
                    attempt, policy.max_attempts, filename, url, e
                ));
                match policy.decide(attempt, e.kind()) {
                    RetryDecision::NoRetry => return Err(e),
                    RetryDecision::RetryAfter(delay) => {
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                    }
                }
            }
        }
    }
}
