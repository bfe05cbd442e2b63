use std::collections::HashMap;
use std::fs::File;
use std::io::Read as _;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::flags::error::Error;

/// Name of the database file expected inside the configured folder.
pub const DATABASE_FILENAME: &str = "compile_commands.json";

/// Raw `compile_commands.json` element.
#[derive(Serialize, Deserialize, Debug)]
pub struct CompileCommandsEntry {
    /// everything relative to this directory
    pub directory: String,

    /// what file this compiles
    pub file: String,

    /// command as a string only (needs split)
    pub command: Option<String>,

    /// split-out arguments for compilation
    pub arguments: Option<Vec<String>>,

    /// Optional what gets outputted
    pub output: Option<String>,
}

/// Compiler invocation recorded for a single translation unit.
///
/// Flags are kept exactly as recorded; relative paths inside them are
/// only made absolute at resolve time, against [`compiler_working_dir`].
///
/// [`compiler_working_dir`]: CompilationInfo::compiler_working_dir
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationInfo {
    pub compiler_flags: Vec<String>,
    pub compiler_working_dir: Utf8PathBuf,
}

impl CompileCommandsEntry {
    /// Split into the lookup key (absolute file path) and the recorded
    /// invocation. Relative `file` fields resolve under `directory`.
    fn into_keyed_info(self) -> Result<(Utf8PathBuf, CompilationInfo), Error> {
        let start_dir = Utf8PathBuf::from(self.directory);

        let source_file = Utf8PathBuf::from(self.file);
        let file_path = if source_file.is_relative() {
            start_dir.join(source_file)
        } else {
            source_file
        };

        let compiler_flags = match (self.arguments, self.command) {
            (Some(arguments), _) => arguments,
            (None, Some(command)) => {
                shlex::split(&command).ok_or_else(|| Error::BadCommandQuoting {
                    path: file_path.clone(),
                })?
            }
            (None, None) => {
                return Err(Error::MissingCommand { path: file_path });
            }
        };

        Ok((
            file_path,
            CompilationInfo {
                compiler_flags,
                compiler_working_dir: start_dir,
            },
        ))
    }
}

/// In-memory index of a `compile_commands.json`, keyed by the absolute
/// path of each compiled file.
#[derive(Debug, Default)]
pub struct CompilationDatabase {
    entries: HashMap<Utf8PathBuf, CompilationInfo>,
}

impl CompilationDatabase {
    /// Load the database from a folder containing [`DATABASE_FILENAME`].
    pub fn load(folder: &Utf8Path) -> Result<Self, Error> {
        let path = folder.join(DATABASE_FILENAME);

        let mut file = File::open(&path).map_err(|source| Error::IOError {
            source,
            path: path.clone(),
            message: "open",
        })?;
        let mut json_string = String::new();

        file.read_to_string(&mut json_string)
            .map_err(|source| Error::IOError {
                source,
                path: path.clone(),
                message: "read_to_string",
            })?;

        let raw_items: Vec<CompileCommandsEntry> =
            serde_json::from_str(&json_string).map_err(Error::JsonParseError)?;

        let mut entries = HashMap::new();
        for item in raw_items {
            match item.into_keyed_info() {
                Ok((file_path, info)) => {
                    entries.insert(file_path, info);
                }
                Err(e) => {
                    warn!("Skipping unusable database entry: {:?}", e);
                }
            }
        }

        debug!("Loaded {} entries from {}", entries.len(), path);

        Ok(Self { entries })
    }

    pub fn get_compilation_info_for_file(&self, filename: &Utf8Path) -> Option<&CompilationInfo> {
        self.entries.get(filename)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn database_from(json: &str) -> CompilationDatabase {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DATABASE_FILENAME), json).unwrap();
        CompilationDatabase::load(Utf8Path::from_path(dir.path()).unwrap()).unwrap()
    }

    #[test]
    fn test_load_with_arguments() {
        let db = database_from(
            r#"[
              {
                "directory": "/work",
                "file": "src/main.cc",
                "arguments": ["clang++", "-Iinclude", "-c", "src/main.cc"]
              }
            ]"#,
        );

        assert_eq!(db.len(), 1);
        assert_eq!(
            db.get_compilation_info_for_file(Utf8Path::new("/work/src/main.cc")),
            Some(&CompilationInfo {
                compiler_flags: vec![
                    "clang++".to_string(),
                    "-Iinclude".to_string(),
                    "-c".to_string(),
                    "src/main.cc".to_string(),
                ],
                compiler_working_dir: Utf8PathBuf::from("/work"),
            })
        );
        assert_eq!(
            db.get_compilation_info_for_file(Utf8Path::new("/work/src/other.cc")),
            None
        );
    }

    #[test]
    fn test_load_with_command_string() {
        let db = database_from(
            r#"[
              {
                "directory": "/work",
                "file": "/work/lib.cpp",
                "command": "g++ -I 'some dir' -c /work/lib.cpp"
              }
            ]"#,
        );

        let info = db
            .get_compilation_info_for_file(Utf8Path::new("/work/lib.cpp"))
            .unwrap();
        assert_eq!(
            info.compiler_flags,
            vec!["g++", "-I", "some dir", "-c", "/work/lib.cpp"]
        );
        assert_eq!(info.compiler_working_dir, Utf8PathBuf::from("/work"));
    }

    #[test]
    fn test_entries_without_commands_are_skipped() {
        let db = database_from(
            r#"[
              { "directory": "/work", "file": "a.cc" },
              {
                "directory": "/work",
                "file": "b.cc",
                "arguments": ["cc", "-c", "b.cc"]
              }
            ]"#,
        );

        assert_eq!(db.len(), 1);
        assert!(db
            .get_compilation_info_for_file(Utf8Path::new("/work/a.cc"))
            .is_none());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DATABASE_FILENAME), "not json").unwrap();

        let result = CompilationDatabase::load(Utf8Path::from_path(dir.path()).unwrap());
        assert!(matches!(result, Err(Error::JsonParseError(_))));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = CompilationDatabase::load(Utf8Path::from_path(dir.path()).unwrap());
        assert!(matches!(result, Err(Error::IOError { .. })));
    }
}
