pub mod flags;

pub use flags::compiledb::{CompilationDatabase, CompilationInfo};
pub use flags::config::ResolverConfig;
pub use flags::resolver::{FlagResolver, FlagSet};
