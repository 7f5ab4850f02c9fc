use std::path::PathBuf;

use structopt::clap::AppSettings;
use structopt::StructOpt;

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, StructOpt)]
#[structopt(
name = "DBColumnCheck",
version = env ! ("CARGO_PKG_VERSION"),
about = "Checks whether a column exists in a table of a SQLite database and writes a one-line report to a text file.",
setting = AppSettings::ColoredHelp,
)]
pub struct Args {
    /// Activate verbose mode
    #[structopt(short = "v", long = "verbose")]
    pub verbose: bool,

    /// Activate quiet mode
    #[structopt(short = "q", long = "quiet")]
    pub quiet: bool,

    /// Config file
    #[structopt(short = "c", long = "config", parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// Database file to inspect
    #[structopt(short = "d", long = "database", parse(from_os_str))]
    pub database: Option<PathBuf>,

    /// Report file, overwritten on every run
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    pub output: Option<PathBuf>,

    /// Table to inspect
    #[structopt(short = "t", long = "table")]
    pub table: Option<String>,

    /// Column that must be present
    #[structopt(short = "C", long = "column")]
    pub column: Option<String>,
}

impl Args {
    /// Config file to read and whether the user asked for it explicitly.
    pub fn config_file(&self) -> (PathBuf, bool) {
        match &self.config {
            Some(path) => (path.clone(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        }
    }
}
