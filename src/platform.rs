//! Platform-dependent constants used when choosing and naming temporary entries.

/// A base directory derived from an environment variable, e.g. `%SYSTEMROOT%\Temp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedRoot {
    /// The variable holding the root directory.
    pub var: &'static str,
    /// Appended to the variable's value.
    pub suffix: &'static str,
}

/// The constants table for one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformProfile {
    /// Separator placed between the base directory and the leaf name.
    pub separator: &'static str,
    /// Longest path accepted, including a terminating NUL.
    pub max_path_length: usize,
    /// Longest leaf name accepted.
    pub max_file_name_length: usize,
    /// Variables conventionally holding a temporary directory, in priority order.
    pub temp_vars: &'static [&'static str],
    /// System roots derived from other variables.
    pub derived_roots: &'static [DerivedRoot],
    /// Well-known literal temporary directories.
    pub fixed_roots: &'static [&'static str],
    /// Variable holding the working directory, tried last.
    pub cwd_var: &'static str,
}

const TEMP_VARS: &[&str] = &["TEMP", "TMP", "TMPDIR"];

impl PlatformProfile {
    pub const UNIX: Self = Self {
        separator: "/",
        max_path_length: 4096,
        max_file_name_length: 255,
        temp_vars: TEMP_VARS,
        derived_roots: &[],
        fixed_roots: &["/tmp", "/var/tmp", "/usr/tmp"],
        cwd_var: "PWD",
    };

    pub const WINDOWS: Self = Self {
        separator: "\\",
        max_path_length: 260,
        max_file_name_length: 255,
        temp_vars: TEMP_VARS,
        derived_roots: &[
            DerivedRoot {
                var: "SYSTEMROOT",
                suffix: "\\Temp",
            },
            DerivedRoot {
                var: "USERPROFILE",
                suffix: "\\AppData\\Local\\Temp",
            },
        ],
        fixed_roots: &["c:\\temp", "c:\\tmp"],
        cwd_var: "CD",
    };

    /// The profile of the platform this crate was compiled for.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::WINDOWS
        } else {
            Self::UNIX
        }
    }

    /// Whether a leaf of `leaf_len` bytes under `base_len` bytes of base path
    /// fits both the path and the file name limit.
    pub const fn fits(&self, base_len: usize, leaf_len: usize) -> bool {
        leaf_len <= self.max_file_name_length
            && base_len + self.separator.len() + leaf_len + 1 <= self.max_path_length
    }
}

impl Default for PlatformProfile {
    fn default() -> Self {
        Self::current()
    }
}
