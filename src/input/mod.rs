//! Input handling: uploads and payload resolution.

pub mod resolver;
pub mod upload;

pub use resolver::{SUPPORTED_SUFFIX, resolve, resolve_payload, resolve_with, try_resolve};
pub use upload::{LocalFile, Upload, UploadedFile};
