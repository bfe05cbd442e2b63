use clap::Parser;

use camino::Utf8PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use completion_flags::{FlagResolver, ResolverConfig};

/// Prints the compiler flag set a semantic engine would parse each
/// file with
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Project root that relative fallback flags resolve against
    #[arg(short, long, default_value = ".")]
    root: Utf8PathBuf,

    /// Folder containing compile_commands.json
    #[arg(short, long)]
    database: Option<Utf8PathBuf>,

    /// Files to resolve flags for
    #[arg(required = true)]
    files: Vec<Utf8PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish(),
    )?;

    let args = Args::parse();

    let mut config = ResolverConfig::with_root(args.root);
    config.database_folder = args.database;

    let resolver = FlagResolver::new(config);

    for file in args.files {
        match resolver.resolve(&file) {
            Some(flag_set) => {
                println!("{}:", file);
                for flag in flag_set.flags {
                    println!("  {}", flag);
                }
            }
            None => println!("{}: no flags available", file),
        }
    }

    Ok(())
}
