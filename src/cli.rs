use clap::Parser;

/// Sort the distinct lines of a file by loading them into a byte trie.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File to read lines from, `-` for standard input.
    #[arg(default_value = "-")]
    pub input: clio::Input,

    /// Prefix each line with the number of times it occurred.
    #[arg(short, long)]
    pub count: bool,

    /// Drop every line found in this file before printing.
    #[arg(short, long)]
    pub remove: Option<clio::Input>,

    /// File to write to, `-` for standard output.
    #[arg(short, long, default_value = "-")]
    pub output: clio::Output,
}
