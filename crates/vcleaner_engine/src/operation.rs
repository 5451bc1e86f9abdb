use std::path::Path;

use vcleaner_core::{clean_text, inspect_text};
use vcleaner_logging::{vcleaner_debug, vcleaner_info};

use crate::decode::{read_text, ReadError};
use crate::persist::{AtomicFileWriter, PersistError};
use crate::report::{CleanReport, InspectReport};

#[derive(Debug, thiserror::Error)]
pub enum OperationError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

impl OperationError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, OperationError::Read(ReadError::NotFound { .. }))
    }
}

/// Write a copy of `input` holding only allowed characters to `output`.
///
/// Nothing is written when the input cannot be read.
pub fn clean_file(input: &Path, output: &Path) -> Result<CleanReport, OperationError> {
    vcleaner_info!("cleaning {:?} into {:?}", input, output);
    let decoded = read_text(input)?;
    let cleaned = clean_text(&decoded.text);

    let writer = AtomicFileWriter::new(output.to_path_buf());
    let bytes = writer.write(&cleaned.text)?;
    vcleaner_debug!(
        "wrote {} bytes to {:?}, removed {} hidden characters",
        bytes,
        writer.target(),
        cleaned.hidden_removed
    );

    Ok(CleanReport::new(&cleaned, output.to_path_buf()))
}

/// Count hidden characters in `input` without modifying it.
pub fn inspect_file(input: &Path) -> Result<InspectReport, OperationError> {
    vcleaner_info!("inspecting {:?}", input);
    let decoded = read_text(input)?;
    let inspection = inspect_text(&decoded.text);
    vcleaner_debug!(
        "found {} hidden characters ({} distinct) in {:?}",
        inspection.total_hidden(),
        inspection.tally.distinct(),
        input
    );

    Ok(InspectReport::new(&inspection))
}
