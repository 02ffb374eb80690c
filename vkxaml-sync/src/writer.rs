//! Atomic writer for generated dictionaries.
//!
//! A write happens in two phases. Every file is first staged as
//! `<path>.vkxaml.tmp`; only when all of them are staged and every target is
//! known to be replaceable are the temporaries renamed into place. Any
//! failure removes the staged files, so a run leaves either all outputs or
//! none of the new ones.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{io_err, SyncError};
use crate::pipeline::GeneratedFiles;

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (created or replaced).
    Written { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path } | WriteResult::WouldWrite { path } => path,
        }
    }
}

/// One output waiting to be renamed into place.
struct Staged {
    tmp: PathBuf,
    path: PathBuf,
    existed: bool,
}

fn tmp_path(path: &Path) -> PathBuf {
    PathBuf::from(format!("{}.vkxaml.tmp", path.display()))
}

fn discard(staged: &[Staged]) {
    for entry in staged {
        let _ = fs::remove_file(&entry.tmp);
    }
}

/// Write every generated file into `out_dir`, creating it when missing.
///
/// Results come back in the map's (file name) order.
pub fn write_outputs(
    out_dir: &Path,
    files: &GeneratedFiles,
    dry_run: bool,
) -> Result<Vec<WriteResult>, SyncError> {
    let targets: Vec<(PathBuf, &String)> = files
        .iter()
        .map(|(name, content)| (out_dir.join(name), content))
        .collect();

    if dry_run {
        return Ok(targets
            .into_iter()
            .map(|(path, _)| {
                tracing::info!("[dry-run] would write: {}", path.display());
                WriteResult::WouldWrite { path }
            })
            .collect());
    }

    fs::create_dir_all(out_dir).map_err(|e| io_err(out_dir, e))?;

    let mut staged = Vec::with_capacity(targets.len());
    for (path, content) in targets {
        let tmp = tmp_path(&path);
        if let Err(e) = fs::write(&tmp, content) {
            let _ = fs::remove_file(&tmp);
            discard(&staged);
            return Err(io_err(tmp, e));
        }
        let existed = path.exists();
        staged.push(Staged { tmp, path, existed });
    }

    if let Some(blocked) = staged.iter().find(|s| s.path.is_dir()) {
        let err = io_err(
            &blocked.path,
            io::Error::other("output path is occupied by a directory"),
        );
        discard(&staged);
        return Err(err);
    }

    commit(&staged)
}

fn commit(staged: &[Staged]) -> Result<Vec<WriteResult>, SyncError> {
    for (done, entry) in staged.iter().enumerate() {
        if let Err(e) = fs::rename(&entry.tmp, &entry.path) {
            // Files this run created are taken back; replaced ones cannot be.
            for previous in &staged[..done] {
                if !previous.existed {
                    let _ = fs::remove_file(&previous.path);
                }
            }
            discard(&staged[done..]);
            return Err(io_err(&entry.path, e));
        }
    }

    Ok(staged
        .iter()
        .map(|entry| {
            tracing::info!("wrote: {}", entry.path.display());
            WriteResult::Written {
                path: entry.path.clone(),
            }
        })
        .collect())
}
