use clap::{Parser, Subcommand};
use std::path::PathBuf;

fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "pats", version = get_version())]
#[command(about = "Store and run named search patterns", long_about = None)]
pub struct Cli {
    /// Name of a stored pattern to run
    pub name: Option<String>,

    /// Search target (default: current directory; ignored when stdin is piped)
    pub target: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the pattern storage directory
    #[arg(long, global = true, value_name = "DIR")]
    pub custom_path: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save a new pattern definition (never overwrites)
    Save {
        /// Name to store the pattern under
        name: String,

        /// Flags passed to the search engine (e.g. -Hnri)
        #[arg(allow_hyphen_values = true)]
        flags: String,

        /// The search pattern
        #[arg(allow_hyphen_values = true)]
        pattern: String,

        /// Search engine to use instead of grep
        #[arg(long)]
        engine: Option<String>,
    },

    /// List stored pattern names
    #[command(alias = "ls")]
    List,

    /// Print the command a pattern would run instead of running it
    Dump {
        /// Name of the stored pattern
        name: String,

        /// Search target (default: current directory)
        target: Option<String>,
    },

    /// Create the pattern storage directory
    Init,
}
