// Path: moo-core/src/install/extract.rs
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, Read, Seek, Write};
use std::path::{Component, Path};

use bzip2::read::BzDecoder;
use flate2::read::GzDecoder;
use moo_common::error::{MooError, Result};
use tar::Archive;
use tracing::debug;
use xz2::read::XzDecoder;
use zip::read::ZipArchive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveType {
    TarGz,
    TarBz2,
    TarXz,
    Tar,
    Zip,
}

impl ArchiveType {
    pub fn from_file_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Some(Self::TarGz)
        } else if name.ends_with(".tar.bz2") || name.ends_with(".tbz") || name.ends_with(".tbz2") {
            Some(Self::TarBz2)
        } else if name.ends_with(".tar.xz") || name.ends_with(".txz") {
            Some(Self::TarXz)
        } else if name.ends_with(".tar") {
            Some(Self::Tar)
        } else if name.ends_with(".zip") {
            Some(Self::Zip)
        } else {
            None
        }
    }

    /// Determines the archive type from the file name, then from its magic bytes.
    pub fn detect(path: &Path) -> Result<Self> {
        if let Some(kind) = path
            .file_name()
            .and_then(OsStr::to_str)
            .and_then(Self::from_file_name)
        {
            return Ok(kind);
        }
        let sniffed = infer::get_from_path(path)
            .map_err(|e| MooError::fs("Failed to read archive header of", path, e))?;
        let kind = match sniffed.map(|k| k.extension()) {
            Some("gz") => Self::TarGz,
            Some("bz2") => Self::TarBz2,
            Some("xz") => Self::TarXz,
            Some("tar") => Self::Tar,
            Some("zip") => Self::Zip,
            other => {
                return Err(MooError::ExtractionError(format!(
                    "Unsupported archive type ({}) for {}",
                    other.unwrap_or("unknown"),
                    path.display()
                )))
            }
        };
        debug!("Sniffed archive type {:?} for {}", kind, path.display());
        Ok(kind)
    }
}

/// Copies the single archive entry named `entry_name` into `out`.
///
/// The entry matches when its path equals `entry_name`, or equals it once the
/// archive's top-level directory is stripped. Returns
/// [`MooError::ExtractionError`] if no regular file matches.
pub fn extract_entry<W: Write>(
    archive_path: &Path,
    archive_type: ArchiveType,
    entry_name: &str,
    out: &mut W,
) -> Result<u64> {
    debug!(
        "Extracting '{}' from archive '{}' (type: {:?})",
        entry_name,
        archive_path.display(),
        archive_type
    );
    let file = File::open(archive_path)
        .map_err(|e| MooError::fs("Failed to open archive", archive_path, e))?;
    let wanted = Path::new(entry_name);

    let copied = match archive_type {
        ArchiveType::Zip => copy_zip_entry(file, wanted, out, archive_path)?,
        ArchiveType::TarGz => copy_tar_entry(GzDecoder::new(file), wanted, out, archive_path)?,
        ArchiveType::TarBz2 => copy_tar_entry(BzDecoder::new(file), wanted, out, archive_path)?,
        ArchiveType::TarXz => copy_tar_entry(XzDecoder::new(file), wanted, out, archive_path)?,
        ArchiveType::Tar => copy_tar_entry(file, wanted, out, archive_path)?,
    };

    copied.ok_or_else(|| {
        MooError::ExtractionError(format!(
            "Entry '{}' not found in archive {}",
            entry_name,
            archive_path.display()
        ))
    })
}

fn copy_tar_entry<R: Read, W: Write>(
    reader: R,
    wanted: &Path,
    out: &mut W,
    archive_path_for_log: &Path,
) -> Result<Option<u64>> {
    let mut archive = Archive::new(reader);
    let entries = archive.entries().map_err(|e| tar_error(archive_path_for_log, e))?;

    for entry_result in entries {
        let mut entry = entry_result.map_err(|e| tar_error(archive_path_for_log, e))?;
        if !entry.header().entry_type().is_file() {
            continue;
        }
        let path = entry
            .path()
            .map_err(|e| tar_error(archive_path_for_log, e))?
            .into_owned();
        if !entry_matches(&path, wanted) {
            continue;
        }
        debug!("Found TAR entry {}", path.display());
        let copied = io::copy(&mut entry, out).map_err(|e| tar_error(archive_path_for_log, e))?;
        return Ok(Some(copied));
    }
    Ok(None)
}

fn copy_zip_entry<R: Read + Seek, W: Write>(
    reader: R,
    wanted: &Path,
    out: &mut W,
    archive_path_for_log: &Path,
) -> Result<Option<u64>> {
    let mut archive = ZipArchive::new(reader).map_err(|e| {
        MooError::ExtractionError(format!(
            "Failed to open ZIP {}: {}",
            archive_path_for_log.display(),
            e
        ))
    })?;

    for i in 0..archive.len() {
        let mut file = archive.by_index(i).map_err(|e| {
            MooError::ExtractionError(format!(
                "Error reading ZIP index {} in {}: {}",
                i,
                archive_path_for_log.display(),
                e
            ))
        })?;
        if file.is_dir() || file.is_symlink() {
            continue;
        }
        let Some(path) = file.enclosed_name() else {
            debug!("Skipping unsafe ZIP entry name {}", file.name());
            continue;
        };
        if !entry_matches(&path, wanted) {
            continue;
        }
        debug!("Found ZIP entry {}", path.display());
        let copied = io::copy(&mut file, out).map_err(|e| {
            MooError::ExtractionError(format!(
                "Failed to read ZIP entry {} in {}: {}",
                path.display(),
                archive_path_for_log.display(),
                e
            ))
        })?;
        return Ok(Some(copied));
    }
    Ok(None)
}

fn tar_error(archive_path: &Path, e: io::Error) -> MooError {
    MooError::ExtractionError(format!(
        "Error reading TAR {}: {}",
        archive_path.display(),
        e
    ))
}

/// Normal components of `path`, or `None` if it escapes its root.
fn normal_components(path: &Path) -> Option<Vec<&OsStr>> {
    let mut parts = Vec::new();
    for comp in path.components() {
        match comp {
            Component::Normal(p) => parts.push(p),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(parts)
}

fn entry_matches(path: &Path, wanted: &Path) -> bool {
    let (Some(have), Some(want)) = (normal_components(path), normal_components(wanted)) else {
        return false;
    };
    if want.is_empty() {
        return false;
    }
    have == want || (have.len() == want.len() + 1 && have[1..] == want[..])
}
