use camino::Utf8PathBuf;

/// Front-end and language-mode flags, always emitted first.
pub const LANGUAGE_FLAGS: &[&str] = &["-x", "c++", "-std=c++2a", "-stdlib=libc++", "-fexceptions"];

/// Strictness flags, always emitted last.
pub const WARNING_FLAGS: &[&str] = &[
    "-Wall",
    "-Wextra",
    "-Werror",
    "-Wno-gnu-zero-variadic-macro-arguments",
    "-pedantic",
];

/// Toolchain search paths used when no database is available. These are
/// the usual libc++ locations; override per machine via
/// [`ResolverConfig::system_include_dirs`].
pub const DEFAULT_SYSTEM_INCLUDE_DIRS: &[&str] = &[
    "/Applications/Xcode.app/Contents/Developer/Toolchains/XcodeDefault.xctoolchain/usr/bin/../lib/c++/v1",
    "/Applications/Xcode.app/Contents/Developer/Toolchains/XcodeDefault.xctoolchain/usr/include",
    "/usr/lib/c++/v1",
];

/// Everything a [`FlagResolver`] needs, gathered up front: built once
/// at startup and read-only afterwards.
///
/// [`FlagResolver`]: crate::flags::resolver::FlagResolver
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Directory relative paths in the fallback flag set resolve
    /// against.
    pub root: Utf8PathBuf,

    /// Folder expected to hold `compile_commands.json`. `None`
    /// disables database lookups entirely.
    pub database_folder: Option<Utf8PathBuf>,

    /// Project include directories, emitted as `-I` pairs. Relative
    /// entries stay relative here and become absolute (under `root`)
    /// at resolve time.
    pub include_dirs: Vec<Utf8PathBuf>,

    /// Toolchain include directories, emitted as `-isystem` pairs
    /// after the project includes.
    pub system_include_dirs: Vec<Utf8PathBuf>,
}

impl ResolverConfig {
    /// Configuration serving `root` with the stock flag set and no
    /// database.
    pub fn with_root(root: impl Into<Utf8PathBuf>) -> Self {
        let root = root.into();
        Self {
            include_dirs: vec![root.clone()],
            system_include_dirs: DEFAULT_SYSTEM_INCLUDE_DIRS
                .iter()
                .map(Utf8PathBuf::from)
                .collect(),
            database_folder: None,
            root,
        }
    }

    /// The static fallback flag list, in invocation order: language
    /// mode, `-I` pairs, `-isystem` pairs, warnings. Pairing flags stay
    /// adjacent so the list survives path rewriting unchanged in shape.
    pub fn default_flags(&self) -> Vec<String> {
        let mut flags: Vec<String> = LANGUAGE_FLAGS.iter().map(|f| f.to_string()).collect();

        for dir in &self.include_dirs {
            flags.push("-I".to_string());
            flags.push(dir.to_string());
        }

        for dir in &self.system_include_dirs {
            flags.push("-isystem".to_string());
            flags.push(dir.to_string());
        }

        flags.extend(WARNING_FLAGS.iter().map(|f| f.to_string()));

        flags
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::with_root(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags_shape() {
        let config = ResolverConfig::with_root("/repo");
        let flags = config.default_flags();

        assert_eq!(&flags[0..2], &["-x".to_string(), "c++".to_string()]);
        assert!(flags.contains(&"-std=c++2a".to_string()));

        // the root itself is served as an include directory
        let i_pos = flags.iter().position(|f| f == "-I").unwrap();
        assert_eq!(flags[i_pos + 1], "/repo");

        // warnings close the list
        assert_eq!(flags.last().unwrap(), "-pedantic");
    }

    #[test]
    fn test_relative_include_dirs_stay_relative() {
        let mut config = ResolverConfig::with_root("/repo");
        config.include_dirs.push(Utf8PathBuf::from("third_party/abseil"));

        let flags = config.default_flags();
        assert!(flags.contains(&"third_party/abseil".to_string()));
    }
}
