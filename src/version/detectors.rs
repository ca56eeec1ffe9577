use std::env;

/// EnvSource port for reading environment variables.
///
/// Abstracting process environment access lets tests simulate each CI
/// provider deterministically without mutating the real environment.
pub trait EnvSource {
    /// Returns the value of the environment variable, if set.
    fn var(&self, key: &str) -> Option<String>;
}

/// EnvSource backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// Build metadata derived from one CI provider's environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildMetadata {
    pub full_version: String,
    pub build_id: String,
    pub commit_id: String,
    pub branch_name: String,
}

/// A CI provider detector: a marker variable whose presence identifies
/// the provider, plus an extraction function over its environment.
pub struct CiProvider {
    pub name: &'static str,
    marker: &'static str,
    extract: fn(&dyn EnvSource, &str) -> BuildMetadata,
}

impl CiProvider {
    pub fn matches(&self, env: &dyn EnvSource) -> bool {
        env.var(self.marker).is_some()
    }

    pub fn extract(&self, env: &dyn EnvSource, version: &str) -> BuildMetadata {
        (self.extract)(env, version)
    }
}

/// Providers in precedence order; the first whose marker variable is
/// set wins. Adding a new provider is a local, additive change here.
pub const PROVIDERS: &[CiProvider] = &[
    CiProvider {
        name: "GitLab CI",
        marker: "GITLAB_CI",
        extract: extract_gitlab,
    },
    CiProvider {
        name: "Jenkins",
        marker: "GIT_COMMIT",
        extract: extract_jenkins,
    },
];

fn var_or_empty(env: &dyn EnvSource, key: &str) -> String {
    env.var(key).unwrap_or_default()
}

fn extract_gitlab(env: &dyn EnvSource, version: &str) -> BuildMetadata {
    let pipeline_id = var_or_empty(env, "CI_PIPELINE_ID");
    BuildMetadata {
        full_version: format!("{}.{}", version, pipeline_id),
        build_id: pipeline_id,
        commit_id: var_or_empty(env, "CI_COMMIT_SHA"),
        // CI_COMMIT_REF_NAME rather than CI_COMMIT_BRANCH so tag
        // pipelines also resolve a ref.
        branch_name: var_or_empty(env, "CI_COMMIT_REF_NAME"),
    }
}

fn extract_jenkins(env: &dyn EnvSource, version: &str) -> BuildMetadata {
    let revision = env
        .var("BUILD_TIMESTAMP")
        .unwrap_or_else(|| var_or_empty(env, "BUILD_NUMBER"));
    BuildMetadata {
        full_version: format!("{}.{}", version, revision),
        build_id: var_or_empty(env, "BUILD_NUMBER"),
        commit_id: var_or_empty(env, "GIT_COMMIT"),
        branch_name: var_or_empty(env, "BRANCH_NAME"),
    }
}

#[cfg(test)]
pub(crate) use self::tests::MapEnv;
