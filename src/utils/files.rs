use crate::manifest::Job;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Ensure the output directory exists (idempotent, flat layout).
pub fn ensure_output_dir(path: &str) -> io::Result<()> {
    let dir = Path::new(path);
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        println!("Created directory: {}", dir.display());
    }
    Ok(())
}

/// Batch check which destinations already exist to avoid re-downloading
pub fn batch_check_existing(output_dir: &Path, jobs: &[Job]) -> HashMap<String, bool> {
    jobs.par_iter()
        .map(|job| {
            let dest = output_dir.join(&job.filename);
            (job.filename.clone(), dest.exists())
        })
        .collect()
}
