use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

pub mod cards;
pub mod ocean;

/// Built-in asset sets, one per bundled job list.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AssetSet {
    /// Classic playing-card faces and back
    Cards,
    /// Ocean-animal clip art with fallback mirrors
    Ocean,
}

impl AssetSet {
    /// The bundled job list for this set.
    pub fn jobs(&self) -> Vec<Job> {
        match self {
            AssetSet::Cards => cards::jobs(),
            AssetSet::Ocean => ocean::jobs(),
        }
    }
}

/// One download job: where to fetch from and what to name the result.
///
/// Filenames are expected to be unique within a run; this is not
/// enforced, and a duplicate simply means the last write wins.
#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    /// Primary source URL.
    pub url: String,
    /// Destination file name inside the output directory.
    pub filename: String,
    /// Optional second source, tried once the primary is exhausted.
    pub fallback_url: Option<String>,
}

/// Load a job list from a JSON manifest file (an array of job records).
pub fn load_manifest(path: &str) -> io::Result<Vec<Job>> {
    let text = fs::read_to_string(Path::new(path))?;
    let jobs: Vec<Job> = serde_json::from_str(&text)?;
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_records_with_and_without_fallback() {
        let json = r#"[
            {"url": "http://example.com/a.png", "filename": "a.png"},
            {"url": "http://example.com/b.png", "filename": "b.png",
             "fallback_url": "http://mirror.example.com/b.png"}
        ]"#;
        let jobs: Vec<Job> = serde_json::from_str(json).unwrap();
        assert_eq!(jobs.len(), 2);
        assert!(jobs[0].fallback_url.is_none());
        assert_eq!(
            jobs[1].fallback_url.as_deref(),
            Some("http://mirror.example.com/b.png")
        );
    }

    #[test]
    fn load_manifest_reads_job_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        fs::write(
            &path,
            r#"[{"url": "http://example.com/x.png", "filename": "x.png"}]"#,
        )
        .unwrap();
        let jobs = load_manifest(path.to_str().unwrap()).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].filename, "x.png");
    }

    #[test]
    fn load_manifest_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, r#"{"not": "an array"}"#).unwrap();
        assert!(load_manifest(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn builtin_sets_have_unique_filenames() {
        for set in [AssetSet::Cards, AssetSet::Ocean] {
            let jobs = set.jobs();
            assert!(!jobs.is_empty());
            let mut names: Vec<_> = jobs.iter().map(|j| j.filename.as_str()).collect();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), jobs.len(), "duplicate filename in {:?}", set);
        }
    }

    #[test]
    fn cards_have_no_fallback_ocean_always_does() {
        assert!(AssetSet::Cards
            .jobs()
            .iter()
            .all(|job| job.fallback_url.is_none()));
        assert!(AssetSet::Ocean
            .jobs()
            .iter()
            .all(|job| job.fallback_url.is_some()));
    }
}
