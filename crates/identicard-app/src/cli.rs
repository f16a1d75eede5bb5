//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use identicard_core::model::SocialPlatform;

/// Build a scannable vCard from your identity fields.
///
/// Every field is optional. Values come from a JSON record (`--input`) and
/// are overridden by the per-field flags. Nothing is stored or sent anywhere.
#[derive(Parser, Debug)]
#[command(name = "identicard", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the email, website and social links; print errors as JSON.
    Validate(RecordArgs),

    /// Print the vCard text (the QR code payload).
    Build(RecordArgs),

    /// Save the vCard as a .vcf file.
    Export(ExportArgs),

    /// Print the clickable links for the record.
    Links(RecordArgs),

    /// List the selectable country dial codes.
    DialCodes,
}

/// Identity fields.
#[derive(Args, Debug, Clone, Default)]
pub struct RecordArgs {
    /// JSON identity record to start from (`-` reads stdin).
    #[arg(short, long)]
    pub input: Option<String>,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Country dial code, e.g. +44. Defaults to +90.
    #[arg(long)]
    pub dial_code: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub website: Option<String>,

    #[arg(long)]
    pub company: Option<String>,

    /// Job title.
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub note: Option<String>,

    #[arg(long, value_name = "URL")]
    pub linkedin: Option<String>,

    #[arg(long, value_name = "URL")]
    pub instagram: Option<String>,

    /// X (Twitter) profile.
    #[arg(long, value_name = "URL")]
    pub twitter: Option<String>,

    #[arg(long, value_name = "URL")]
    pub github: Option<String>,

    #[arg(long, value_name = "URL")]
    pub youtube: Option<String>,

    #[arg(long, value_name = "URL")]
    pub facebook: Option<String>,

    #[arg(long, value_name = "URL")]
    pub tiktok: Option<String>,

    /// Social profile as PLATFORM=URL, e.g. github=github.com/me. Repeatable;
    /// applied after the per-platform flags.
    #[arg(long = "social", value_name = "PLATFORM=URL", value_parser = parse_social)]
    pub social: Vec<(SocialPlatform, String)>,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub record: RecordArgs,

    /// File name of the download. Defaults to First_Last.vcf.
    #[arg(long)]
    pub filename: Option<String>,

    /// Directory to save into. Defaults to `export.output_dir`.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

/// Parses `PLATFORM=URL`.
///
/// ## Errors
/// Returns a message if the `=` is missing or the platform is unknown.
pub fn parse_social(value: &str) -> Result<(SocialPlatform, String), String> {
    let (platform, url) = value
        .split_once('=')
        .ok_or_else(|| format!("expected PLATFORM=URL, got {value:?}"))?;
    let platform = platform.parse::<SocialPlatform>().map_err(|e| e.to_string())?;
    Ok((platform, url.to_string()))
}
