//! # Polyglot Files
//!
//! Static assets for Polyglot sites: everything in the templates tree that
//! is not a template is copied to the output unchanged.
//!
//! ```rust,no_run
//! use polyglot_files::{PassthroughCopier, reset_output_dir};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), polyglot_files::FilesError> {
//! let out = Path::new("dist");
//! reset_output_dir(out)?;
//!
//! let copier = PassthroughCopier::new(["**/*.hbs", "**/.DS_Store"])?;
//! let report = copier.copy(Path::new("src/templates"), out)?;
//! println!("copied {} file(s), {} bytes", report.copied.len(), report.bytes);
//! # Ok(())
//! # }
//! ```

pub mod copier;
pub mod error;

pub use copier::{CopyReport, DEFAULT_EXCLUDE, PassthroughCopier, reset_output_dir};
pub use error::{FilesError, Result};
