use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ruzip")]
#[command(version)]
#[command(about = "A Rust zip creation utility with HTTP source support", long_about = None)]
#[command(after_help = "Examples:\n  \
  ruzip bundle.zip a.txt b.png        pack two local files into bundle.zip\n  \
  ruzip -j out.zip assets/logo.png    store logo.png without its directory\n  \
  ruzip - photo.jpg | wc -c           write the archive to stdout\n  \
  ruzip out.zip https://example.com/image.png   pack a remote file")]
pub struct Cli {
    /// Output archive path ('-' for stdout)
    #[arg(value_name = "OUTPUT")]
    pub output: String,

    /// Files or HTTP URLs to pack
    #[arg(value_name = "INPUTS", required = true)]
    pub inputs: Vec<String>,

    /// Junk paths (store the base name only)
    #[arg(short = 'j')]
    pub junk_paths: bool,

    /// Overwrite the output file WITHOUT prompting
    #[arg(short = 'o')]
    pub overwrite: bool,

    /// Quiet mode (-qq => quieter)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl Cli {
    pub fn is_stdout(&self) -> bool {
        self.output == "-"
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet > 0 || self.is_stdout()
    }

    pub fn is_very_quiet(&self) -> bool {
        self.quiet > 1
    }
}

/// Whether an input argument refers to a remote payload
pub fn is_http_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}
