use camino::Utf8Path;

/// Extensions that mark a file as a header.
pub const HEADER_EXTENSIONS: &[&str] = &["h", "hxx", "hpp", "hh"];

/// Sibling candidates for the header fallback. Order matters: the
/// first extension yielding an existing sibling with usable flags wins.
pub const SOURCE_EXTENSIONS: &[&str] = &["cpp", "cxx", "cc", "c", "m", "mm"];

#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum FileKind {
    Header,
    Source,
    Unknown,
}

impl FileKind {
    pub fn of(path: &Utf8Path) -> Self {
        let ext = path.extension().unwrap_or("").to_lowercase();
        if HEADER_EXTENSIONS.contains(&ext.as_str()) {
            FileKind::Header
        } else if SOURCE_EXTENSIONS.contains(&ext.as_str()) {
            FileKind::Source
        } else {
            FileKind::Unknown
        }
    }
}
