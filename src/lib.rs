//! bomship - build-time version resolution and BOM upload
//!
//! This library provides two independent build-time facilities:
//!
//! - **Version resolution** (`version`): derive an immutable,
//!   environment-aware version record from a `version.properties` file
//!   and the detected CI provider (GitLab CI, Jenkins, or a local
//!   developer fallback).
//! - **BOM upload** (`upload`): send a generated CycloneDX document to
//!   a Dependency-Track compatible inventory server over HTTPS, with
//!   optional TLS relaxation and failure tolerance.
//!
//! # Example
//!
//! ```no_run
//! use bomship::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! // Resolve the build version
//! let props = PropertySource::load(
//!     Path::new("buildprocess/version.properties"),
//!     LoadMode::Strict,
//! )?;
//! let record = resolve(&props, &ProcessEnv);
//! println!("building {}", record.full_version);
//!
//! // Upload the BOM
//! let request = UploadRequest {
//!     bom_file: "build/reports/bom.json".into(),
//!     uri: "https://dtrack.example/api/v1/bom".into(),
//!     api_key: "odt_...".into(),
//!     project_id: "9f2c5a1e".into(),
//!     trust_all: false,
//!     ignore_failures: false,
//! };
//! let uploader = BomUploader::new(request.trust_all)?;
//! uploader.upload(&request)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod shared;
pub mod upload;
pub mod version;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::shared::{BomshipError, ExitCode, Result};
    pub use crate::upload::{BomUploader, UploadOutcome, UploadRequest};
    pub use crate::version::properties::{LoadMode, PropertySource};
    pub use crate::version::{resolve, ProcessEnv, VersionRecord};
}
