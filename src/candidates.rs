use crate::platform::PlatformProfile;
use std::collections::HashMap;
use std::ffi::OsString;
use std::fmt::Debug;
use std::path::PathBuf;

/// Read access to environment variables.
pub trait Environment: Debug + Send + Sync {
    /// Returns the value of `name`, or `None` if it is unset.
    fn var(&self, name: &str) -> Option<OsString>;
}

/// The environment of the running process.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }
}

/// A fixed set of variables, handy for tests.
impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<OsString> {
        self.get(name).map(OsString::from)
    }
}

/// Lists the base directories a temporary entry may be created in, most
/// preferred first.
///
/// The order is: the profile's temporary directory variables, the system
/// roots derived from variables, the fixed well-known roots and finally the
/// working directory variable. Unset or empty variables are skipped. Nothing
/// is checked on disk.
pub fn candidate_paths(env: &dyn Environment, profile: &PlatformProfile) -> Vec<PathBuf> {
    let lookup = |name: &str| env.var(name).filter(|value| !value.is_empty());

    let mut paths: Vec<PathBuf> = profile
        .temp_vars
        .iter()
        .filter_map(|var| lookup(*var))
        .map(PathBuf::from)
        .collect();

    for root in profile.derived_roots {
        if let Some(mut value) = lookup(root.var) {
            value.push(root.suffix);
            paths.push(PathBuf::from(value));
        }
    }

    paths.extend(profile.fixed_roots.iter().map(PathBuf::from));
    paths.extend(lookup(profile.cwd_var).map(PathBuf::from));
    paths
}
