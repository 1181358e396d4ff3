mod cancel;
mod config;
mod error;
mod geometry;
mod listing;

pub use cancel::CancellationSignal;
pub use config::WalkConfig;
pub use error::{
    ConfigError, ConfigResult, FilesystemError, FilesystemErrorKind, FilesystemResult,
};
pub use geometry::{MonitorMatch, Point, Rect, Size};
pub use listing::DirectoryListing;
