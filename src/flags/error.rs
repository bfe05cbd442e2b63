use camino::Utf8PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("I/O error at path {}: {}", path, message)]
    IOError {
        #[source]
        source: std::io::Error,
        path: Utf8PathBuf,
        message: &'static str,
    },

    #[error("Failed to parse JSON")]
    JsonParseError(serde_json::Error),

    #[error("Entry for {} has neither 'command' nor 'arguments'", path)]
    MissingCommand { path: Utf8PathBuf },

    #[error("Unbalanced quoting in compile command for {}", path)]
    BadCommandQuoting { path: Utf8PathBuf },
}
