//! Command-line arguments, declared with `clap` derive.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "flaremark",
    version,
    about = "Convert a FlareMark document to HTML."
)]
pub struct Args {
    /// The FlareMark file to convert.
    pub input: PathBuf,

    /// Where to write the HTML. Defaults to the input with an `.html`
    /// extension; `-` writes to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file to use instead of `~/.config/flaremark/config.toml`.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Emit indentation as generated CSS classes instead of inline styles.
    #[arg(long)]
    pub class_styles: bool,

    /// Spaces used to indent paragraph content.
    #[arg(long, value_name = "N")]
    pub indent: Option<usize>,

    /// Wrap the output in a complete HTML page.
    #[arg(long)]
    pub standalone: bool,

    /// Exit with an error if the document contains parse errors.
    #[arg(long)]
    pub strict: bool,
}
