use std::path::PathBuf;

use altmem_engine::{normalize_extension, BatchMode, ConvertOptions, DiscoveryOptions};
use clap::Parser;

/// Extract XLIFF alt-trans proposals into TMX 1.4 translation memories.
///
/// By default every input gets its own `.tmx` beside it. With `--merge` all
/// inputs are combined into one file named after its file and unit counts.
#[derive(Parser, Debug)]
#[command(name = "altmem", version = "4.0")]
pub struct Cli {
    /// Input XLIFF file(s), directory(ies), or wildcard patterns
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<String>,

    /// Merge all inputs into one TMX (default: one TMX per input)
    #[arg(long)]
    pub merge: bool,

    /// Output TMX file (merge mode only); auto-named when omitted
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Search directories recursively
    #[arg(short, long)]
    pub recursive: bool,

    /// File extension to search for; may be repeated (default: .xlf .xliff .mxliff .mqxliff .sdlxliff)
    #[arg(long = "ext", visible_alias = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Include the match-quality property in the output
    #[arg(short = 'm', long)]
    pub export_match_quality: bool,

    /// Verbose output (debug-level logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip the countdown before exit
    #[arg(long)]
    pub no_countdown: bool,

    /// Transform rules file (default: bundled xliff_alttrans_to_tmx.ron)
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Also write the log to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn discovery_options(&self) -> DiscoveryOptions {
        let mut options = DiscoveryOptions {
            recursive: self.recursive,
            ..DiscoveryOptions::default()
        };
        if !self.extensions.is_empty() {
            options.extensions = self.extensions.iter().map(|e| normalize_extension(e)).collect();
        }
        options
    }

    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            export_match_quality: self.export_match_quality,
        }
    }

    /// `-o` only has meaning in merge mode.
    pub fn mode(&self) -> BatchMode {
        if self.merge {
            BatchMode::Merge {
                output: self.output.clone(),
            }
        } else {
            BatchMode::Individual
        }
    }
}
