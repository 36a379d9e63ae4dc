use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod icon_gen;

#[derive(Debug, Parser)]
#[clap(
    name = "placeholder-icons",
    about = "Generate procedural PNG placeholder icons"
)]
struct Args {
    /// Output directory. Must already exist.
    #[clap(short, long, value_name = "DIR", default_value = "./icons")]
    output: PathBuf,

    /// Custom PNG icon sizes to generate. When set, only these sizes are generated.
    #[clap(short, long, value_delimiter = ',', value_name = "SIZES")]
    png: Option<Vec<u32>>,

    /// The background color of the icons (CSS color format)
    #[clap(long, default_value = "#0066cc")]
    color: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(args)
}
