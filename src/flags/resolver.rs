use camino::Utf8Path;
use tracing::{debug, trace, warn};

use crate::flags::compiledb::{CompilationDatabase, CompilationInfo};
use crate::flags::config::ResolverConfig;
use crate::flags::filetype::{FileKind, SOURCE_EXTENSIONS};
use crate::flags::rewrite::make_relative_paths_absolute;

/// Flags for one file, plus whether the host may cache the answer.
#[derive(Debug, Clone, PartialEq)]
pub struct FlagSet {
    pub flags: Vec<String>,
    pub do_cache: bool,
}

/// Produces the compiler flag set a semantic engine should parse a
/// given file with.
///
/// With a database configured (and loadable) flags come from the
/// recorded compile commands; headers borrow the flags of a same-named
/// sibling source file. Without one, a static fallback flag set is
/// served with its relative paths resolved against the configured
/// root.
#[derive(Debug)]
pub struct FlagResolver {
    config: ResolverConfig,
    database: Option<CompilationDatabase>,
}

impl FlagResolver {
    /// The database is loaded here, once. A folder that does not exist
    /// or fails to load leaves the resolver in fallback mode.
    pub fn new(config: ResolverConfig) -> Self {
        let database = match &config.database_folder {
            Some(folder) if folder.exists() => match CompilationDatabase::load(folder) {
                Ok(database) => Some(database),
                Err(e) => {
                    warn!("Compilation database at {} unusable: {:?}", folder, e);
                    None
                }
            },
            Some(folder) => {
                debug!("Compilation database folder {} does not exist", folder);
                None
            }
            None => None,
        };

        Self { config, database }
    }

    /// Flags for `filename`, or `None` when no usable data exists.
    ///
    /// Absence is the only failure mode: a missing entry, a header
    /// with no resolvable sibling and a failed lookup all land here as
    /// `None`, never as an error.
    pub fn resolve(&self, filename: &Utf8Path) -> Option<FlagSet> {
        let final_flags = match &self.database {
            Some(database) => {
                let info = self.compilation_info_for(database, filename)?;
                make_relative_paths_absolute(
                    &info.compiler_flags,
                    Some(info.compiler_working_dir.as_path()),
                )
            }
            None => {
                trace!("No database; serving fallback flags for {}", filename);
                make_relative_paths_absolute(
                    &self.config.default_flags(),
                    Some(self.config.root.as_path()),
                )
            }
        };

        Some(FlagSet {
            flags: final_flags,
            do_cache: true,
        })
    }

    /// Database lookup with the header fallback: a header takes the
    /// flags of the first same-named sibling that exists on disk and
    /// has a non-empty flag list recorded.
    fn compilation_info_for<'db>(
        &self,
        database: &'db CompilationDatabase,
        filename: &Utf8Path,
    ) -> Option<&'db CompilationInfo> {
        if FileKind::of(filename) == FileKind::Header {
            for extension in SOURCE_EXTENSIONS {
                let replacement_file = filename.with_extension(extension);
                if !replacement_file.exists() {
                    continue;
                }
                if let Some(info) = database.get_compilation_info_for_file(&replacement_file) {
                    if !info.compiler_flags.is_empty() {
                        debug!("Header {} borrows flags of {}", filename, replacement_file);
                        return Some(info);
                    }
                }
            }
            return None;
        }

        database.get_compilation_info_for_file(filename)
    }
}
