// moo-core/src/install/binary.rs
use std::fs;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use moo_common::error::{MooError, Result};
use moo_common::model::BinarySpec;
use tempfile::NamedTempFile;
use tracing::debug;

use super::extract::{extract_entry, ArchiveType};

pub const EXECUTABLE_MODE: u32 = 0o755;

/// Extracts `spec.source` from the archive into `dest_dir/spec.installed_name`.
///
/// The file is staged next to its destination and renamed over it, so an
/// existing binary is only replaced by a complete one.
pub fn install_binary(archive_path: &Path, dest_dir: &Path, spec: &BinarySpec) -> Result<PathBuf> {
    let archive_type = ArchiveType::detect(archive_path)?;
    let dest = dest_dir.join(&spec.installed_name);
    debug!(
        "Installing '{}' from {} to {}",
        spec.source,
        archive_path.display(),
        dest.display()
    );

    fs::create_dir_all(dest_dir)
        .map_err(|e| MooError::fs("Failed to create binary directory", dest_dir, e))?;

    let mut staged = NamedTempFile::new_in(dest_dir)
        .map_err(|e| MooError::fs("Failed to create temporary file in", dest_dir, e))?;
    let bytes = extract_entry(archive_path, archive_type, &spec.source, staged.as_file_mut())?;
    debug!("Staged {} bytes at {}", bytes, staged.path().display());

    set_executable(staged.path())?;
    staged.persist(&dest).map_err(|e| {
        MooError::FilesystemError(format!(
            "Failed to move staged binary over {}: {}",
            dest.display(),
            e.error
        ))
    })?;

    debug!("Installed {}", dest.display());
    Ok(dest)
}

/// Sets mode 0755 on `path`.
pub fn set_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        fs::set_permissions(path, fs::Permissions::from_mode(EXECUTABLE_MODE))
            .map_err(|e| MooError::fs("Failed to set executable permissions on", path, e))?;
    }
    #[cfg(not(unix))]
    {
        debug!(
            "Skipping permission bits for {} on non-unix platform",
            path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::install::test_support::write_tar_gz;

    fn spec() -> BinarySpec {
        BinarySpec {
            source: "statusline.sh".into(),
            installed_name: "moo-statusline".into(),
        }
    }

    #[test]
    fn installs_entry_under_its_installed_name() {
        let dir = tempdir().unwrap();
        let archive = dir.path().join("moo-statusline-v1.1.0.tar.gz");
        write_tar_gz(
            &archive,
            &[("moo-statusline-1.1.0/statusline.sh", b"#!/bin/sh\necho moo\n", 0o644)],
        );
        let bin_dir = dir.path().join("prefix/bin");

        let installed = install_binary(&archive, &bin_dir, &spec()).unwrap();

        assert_eq!(installed, bin_dir.join("moo-statusline"));
        assert_eq!(fs::read(&installed).unwrap(), b"#!/bin/sh\necho moo\n");
        #[cfg(unix)]
        assert_eq!(
            fs::metadata(&installed).unwrap().permissions().mode() & 0o777,
            0o755
        );
        // Only the binary remains; the staging file was renamed away.
        assert_eq!(fs::read_dir(&bin_dir).unwrap().count(), 1);
    }

    #[test]
    fn reinstall_replaces_existing_binary() {
        let dir = tempdir().unwrap();
        let bin_dir = dir.path().join("bin");
        fs::create_dir_all(&bin_dir).unwrap();
        fs::write(bin_dir.join("moo-statusline"), b"old").unwrap();

        let archive = dir.path().join("new.tar.gz");
        write_tar_gz(&archive, &[("statusline.sh", b"new", 0o755)]);

        let installed = install_binary(&archive, &bin_dir, &spec()).unwrap();
        assert_eq!(fs::read(installed).unwrap(), b"new");
    }

    #[test]
    fn missing_entry_leaves_existing_binary_untouched() {
        let dir = tempdir().unwrap();
        let bin_dir = dir.path().join("bin");
        fs::create_dir_all(&bin_dir).unwrap();
        fs::write(bin_dir.join("moo-statusline"), b"old").unwrap();

        let archive = dir.path().join("broken.tar.gz");
        write_tar_gz(&archive, &[("pkg/other.sh", b"x", 0o644)]);

        let err = install_binary(&archive, &bin_dir, &spec()).unwrap_err();
        assert!(matches!(err, MooError::ExtractionError(_)));
        assert_eq!(fs::read(bin_dir.join("moo-statusline")).unwrap(), b"old");
        assert_eq!(fs::read_dir(&bin_dir).unwrap().count(), 1);
    }
}
