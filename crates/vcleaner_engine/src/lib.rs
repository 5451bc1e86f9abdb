//! vcleaner engine: file IO and the clean/inspect operations.
mod decode;
mod operation;
mod persist;
mod report;

pub use decode::{decode_dropping_invalid, read_text, DecodedText, ReadError};
pub use operation::{clean_file, inspect_file, OperationError};
pub use persist::{AtomicFileWriter, PersistError};
pub use report::{CleanReport, InspectReport};
