mod blocking;
pub mod progress;
pub mod utils;

pub use blocking::{DEFAULT_CHUNK_SIZE, FileDownloader};
