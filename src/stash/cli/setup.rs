use clap::{ArgAction, Parser, ValueEnum};
use stash::teaser::DEFAULT_TEASER_LINES;
use std::path::PathBuf;

/// Returns the version string, with the git hash appended for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "stash", bin_name = "stash", version = get_version())]
#[command(
    about = "Stash piped text in timestamped files and take it back later",
    long_about = None,
    after_help = "With no flags, reads standard input and stores it as a new stash."
)]
pub struct Cli {
    /// List the N most recent stashes with a teaser
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Print stash N in full (1 is the newest)
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub take: Option<i64>,

    /// Lines of each stash shown by --limit
    #[arg(
        long,
        value_name = "K",
        env = "STASH_TEASER_LINES",
        default_value_t = DEFAULT_TEASER_LINES,
        help_heading = "Options"
    )]
    pub teaser_lines: usize,

    /// Stash directory [default: ~/.stashes]
    #[arg(long, value_name = "PATH", env = "STASH_DIR", help_heading = "Options")]
    pub dir: Option<PathBuf>,

    /// Output format for --limit
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help_heading = "Options")]
    pub output: OutputFormat,

    /// Disable colored output (also honors NO_COLOR)
    #[arg(long, help_heading = "Options")]
    pub no_color: bool,

    /// Diagnostic output on stderr; repeat for more
    #[arg(short, long, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

/// The one thing an invocation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List(i64),
    Take(i64),
    Create,
}

impl Cli {
    /// `--limit` wins over `--take`; with neither, stdin is stashed.
    pub fn mode(&self) -> Mode {
        if let Some(limit) = self.limit {
            return Mode::List(limit);
        }
        if let Some(number) = self.take {
            return Mode::Take(number);
        }
        Mode::Create
    }
}
