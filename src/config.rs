use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_SUFFIX: &str = "-outline";

/// Turn every PNG in a folder into a transparent-background outline image.
#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Folder to scan for `*.png` files; outlines are written next to them.
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Appended to each input's base name to form the output name.
    #[arg(
        short,
        long,
        default_value = DEFAULT_SUFFIX,
        allow_hyphen_values = true,
        value_parser = check_suffix
    )]
    pub suffix: String,

    /// Log per-stage details.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            suffix: DEFAULT_SUFFIX.to_string(),
            verbose: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::parse()
    }
}

fn check_suffix(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("suffix must not be empty, outputs would overwrite their inputs".to_string());
    }
    if s.contains(['/', '\\']) {
        return Err(format!("`{}` contains a path separator", s));
    }
    Ok(s.to_string())
}
