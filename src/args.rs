use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-extract")]
#[command(about = "Extracts product data from a saved product page as JSON")]
#[command(version)]
pub struct Args {
    /// HTML file to read, or `-` for stdin
    pub input: String,

    /// JSON configuration file (currency table, base URL)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL used to resolve relative image sources
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}
