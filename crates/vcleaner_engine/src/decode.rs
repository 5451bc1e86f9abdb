use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use encoding_rs::{DecoderResult, UTF_8};
use vcleaner_logging::{vcleaner_debug, vcleaner_warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    /// Bytes that were not valid UTF-8 and were left out of `text`.
    pub dropped_bytes: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("File '{}' not found!", .path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read '{}': {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Read a whole file as UTF-8 text, dropping malformed byte sequences.
pub fn read_text(path: &Path) -> Result<DecodedText, ReadError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ReadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ReadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    vcleaner_debug!("read {} bytes from {:?}", bytes.len(), path);

    let decoded = decode_dropping_invalid(&bytes);
    if decoded.dropped_bytes > 0 {
        vcleaner_warn!(
            "dropped {} undecodable bytes from {:?}",
            decoded.dropped_bytes,
            path
        );
    }
    Ok(decoded)
}

/// Decode bytes as UTF-8 without BOM handling; malformed sequences are skipped rather
/// than replaced with U+FFFD.
pub fn decode_dropping_invalid(bytes: &[u8]) -> DecodedText {
    let mut decoder = UTF_8.new_decoder_without_bom_handling();
    let mut text = String::with_capacity(bytes.len());
    let mut dropped_bytes = 0;
    let mut input = bytes;

    loop {
        let (result, read) = decoder.decode_to_string_without_replacement(input, &mut text, true);
        input = &input[read..];
        match result {
            DecoderResult::InputEmpty => break,
            DecoderResult::OutputFull => {
                let needed = decoder
                    .max_utf8_buffer_length_without_replacement(input.len())
                    .unwrap_or(input.len());
                text.reserve(needed.max(4));
            }
            DecoderResult::Malformed(bad, _) => dropped_bytes += usize::from(bad),
        }
    }

    DecodedText {
        text,
        dropped_bytes,
    }
}
