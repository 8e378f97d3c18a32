use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

use crate::application::AppError;
use crate::domain::{AccountMapping, Owner, Owners};

/// Indentation used by the owners file consumers
const INDENT: &[u8] = b"    ";

/// Serialize owners as an indented JSON array into any writer.
///
/// No trailing newline is written. Buffered writers are left for the caller
/// to flush.
pub fn write_owners<W: Write>(owners: &Owners, writer: W) -> Result<(), AppError> {
    let mut serializer =
        serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    owners.serialize(&mut serializer)?;
    Ok(())
}

/// Render owners to the exact bytes written to the owners file
pub fn render_owners(owners: &Owners) -> Result<Vec<u8>, AppError> {
    let mut buf = Vec::new();
    write_owners(owners, &mut buf)?;
    Ok(buf)
}

/// Exporter for turning an account mapping into an owners file
pub struct Exporter<'a> {
    mapping: &'a AccountMapping,
}

impl<'a> Exporter<'a> {
    pub fn new(mapping: &'a AccountMapping) -> Self {
        Self { mapping }
    }

    /// One owner per mapping entry, ordered by account name
    pub fn owners(&self) -> Owners {
        self.mapping
            .iter()
            .map(|(name, id)| Owner::new(name, id))
            .collect()
    }

    /// Export owners as JSON to a writer
    pub fn export_json<W: Write>(&self, writer: W) -> Result<Owners, AppError> {
        let owners = self.owners();
        write_owners(&owners, writer)?;
        Ok(owners)
    }

    /// Export owners to a file, replacing it atomically.
    ///
    /// The document goes to a temporary file next to the target first and is
    /// renamed into place only once fully written. On failure nothing at
    /// `path` changes. A symlinked `path` is followed, so the file it points
    /// at is replaced and the link survives. Returns the number of owners
    /// written.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<usize, AppError> {
        let path = path.as_ref();
        let owners = self.owners();
        let bytes = render_owners(&owners)?;

        let target = resolve_target(path);
        let mut tmp = create_temp_for(&target).map_err(|e| AppError::file_access(path, e))?;
        tmp.write_all(&bytes)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| AppError::file_access(path, e))?;
        tmp.persist(&target)
            .map_err(|e| AppError::file_access(path, e.error))?;

        Ok(owners.len())
    }
}

/// Build the owners list for `mapping` and write it to `path`
pub fn export_accounts(mapping: &AccountMapping, path: impl AsRef<Path>) -> Result<usize, AppError> {
    Exporter::new(mapping).export_to_file(path)
}

/// Mode requested for a fresh owners file, narrowed by the process umask
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o666;

/// Follow symlinks to the file that should actually be replaced
fn resolve_target(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Temporary file next to `target`, carrying the permissions the final file
/// should end up with: those of an existing target, otherwise the usual
/// umask-derived mode of a newly created file.
fn create_temp_for(target: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(NEW_FILE_MODE));
    }

    let tmp = builder.tempfile_in(parent_dir(target))?;
    if let Some(meta) = std::fs::metadata(target).ok().filter(|m| m.is_file()) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    Ok(tmp)
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
