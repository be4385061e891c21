//! Seed files preload a cookbook at startup.
//!
//! A seed file is a JSON array of entries in the same shape `POST /entry` accepts.

use std::path::Path;

use color_eyre::eyre::WrapErr;
use cookbook::{Cookbook, NewEntry};
use tracing::instrument;

use crate::Result;

pub(crate) fn parse(contents: &str) -> Result<Vec<NewEntry>> {
    serde_json::from_str(contents).wrap_err("Seed file must be a JSON array of entries")
}

/// Registers every entry from the seed file at `path`, stopping at the first one the cookbook
/// rejects. Returns how many entries were registered.
#[instrument(skip(cookbook), err)]
pub(crate) fn load_into(cookbook: &Cookbook, path: &Path) -> Result<usize> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Couldn't read seed file {}", path.display()))?;

    register_all(cookbook, parse(&contents)?)
}

pub(crate) fn register_all(cookbook: &Cookbook, entries: Vec<NewEntry>) -> Result<usize> {
    let count = entries.len();

    for (index, entry) in entries.into_iter().enumerate() {
        let name = entry.name.clone();

        cookbook
            .register(entry)
            .wrap_err_with(|| format!("Seed entry #{index} ({name:?}) was rejected"))?;
    }

    Ok(count)
}

#[cfg(test)]
pub(crate) fn write_seed_file(contents: &str) -> tempfile::NamedTempFile {
    use std::io::Write as _;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();

    file
}
