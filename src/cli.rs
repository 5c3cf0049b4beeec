//! CLI argument parsing for the resource check.
//!
//! Every flag defaults to the fixed layout, so running with no arguments checks
//! `resources/preferences.gresource.xml`.
use clap::Parser;
use std::path::PathBuf;

/// Directory the manifest and its referenced files live in.
pub const DEFAULT_RESOURCE_ROOT: &str = "resources";

/// Manifest filename inside the resource root.
pub const DEFAULT_MANIFEST_NAME: &str = "preferences.gresource.xml";

#[derive(Parser, Debug)]
#[command(
    name = "check-resources",
    version,
    about = "Check that every file referenced by a GResource manifest exists",
    after_help = "Exit codes:\n  0  all referenced files exist\n  1  manifest missing or unparsable\n  2  one or more referenced files missing"
)]
pub struct CheckArgs {
    /// Resource directory containing the manifest and the files it lists
    #[arg(long, value_name = "DIR", default_value = DEFAULT_RESOURCE_ROOT)]
    pub root: PathBuf,

    /// Manifest filename, relative to the resource directory
    #[arg(long, value_name = "NAME", default_value = DEFAULT_MANIFEST_NAME)]
    pub manifest: PathBuf,

    /// Emit a machine-readable JSON report
    #[arg(long)]
    pub json: bool,

    /// Log each checked entry to stderr
    #[arg(long)]
    pub verbose: bool,
}
