//! CI-aware version resolution.
//!
//! Derives an immutable [`VersionRecord`] from a `version.properties`
//! file plus a snapshot of the environment. A strict precedence chain
//! decides where the build-identifying fields come from: pre-resolved
//! properties first, then the detected CI provider, then a local
//! developer fallback.

pub mod detectors;
pub mod properties;

use chrono::Local;
use detectors::{BuildMetadata, EnvSource, PROVIDERS};
use properties::PropertySource;
use serde::Serialize;
use std::fmt;

pub use detectors::ProcessEnv;
pub use properties::LoadMode;

/// Placeholder commit id for local builds with no source-control info.
const LOCAL_COMMIT_ID: &str = "git-sha1-hash";
/// Placeholder branch name for local builds.
const LOCAL_BRANCH_NAME: &str = "localbranch";

/// An immutable, environment-aware version record.
///
/// All fields are computed exactly once at construction; the record is
/// a pure function of the property source and environment snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    pub major_minor: String,
    pub component: String,
    pub version: String,
    pub release_date: String,
    pub full_version: String,
    #[serde(rename = "buildID")]
    pub build_id: String,
    #[serde(rename = "commitID")]
    pub commit_id: String,
    pub branch_name: String,
}

impl fmt::Display for VersionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (build {}, commit {}, branch {})",
            self.full_version, self.build_id, self.commit_id, self.branch_name
        )
    }
}

/// Resolves a [`VersionRecord`] from a property source and an
/// environment snapshot.
///
/// The precedence chain is strictly ordinal, first match wins:
///
/// 1. `commit.id` property present: an upstream tool already resolved
///    the build metadata, take all four derived fields verbatim from
///    the properties.
/// 2. A known CI provider's marker variable is set: derive the fields
///    from that provider's environment variables.
/// 3. Local developer build: `full_version` gets a `.0` suffix, the
///    build id is the current hour-granularity local timestamp, and
///    commit/branch are fixed placeholders.
pub fn resolve(props: &PropertySource, env: &dyn EnvSource) -> VersionRecord {
    let major_minor = props.get_or_empty("major.minor.version");
    let component = props.get_or_empty("component.version");
    let version = format!("{}.{}", major_minor, component);
    let release_date = props.get_or_empty("releasedate");

    let meta = if props.get("commit.id").is_some() {
        BuildMetadata {
            full_version: props.get_or_empty("full.version"),
            build_id: props.get_or_empty("build.timestamp"),
            commit_id: props.get_or_empty("commit.id"),
            branch_name: props.get_or_empty("branch.name"),
        }
    } else if let Some(provider) = PROVIDERS.iter().find(|p| p.matches(env)) {
        provider.extract(env, &version)
    } else {
        BuildMetadata {
            full_version: format!("{}.0", version),
            build_id: Local::now().format("%Y%m%d%H").to_string(),
            commit_id: LOCAL_COMMIT_ID.to_string(),
            branch_name: LOCAL_BRANCH_NAME.to_string(),
        }
    };

    VersionRecord {
        major_minor,
        component,
        version,
        release_date,
        full_version: meta.full_version,
        build_id: meta.build_id,
        commit_id: meta.commit_id,
        branch_name: meta.branch_name,
    }
}
