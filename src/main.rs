mod cli;

use std::io::{BufRead, BufWriter, Write};

use bytetrie::Trie;
use clap::Parser;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum Error {
    #[error("Unable to read the input: {0}")]
    Input(#[source] std::io::Error),
    #[error("Unable to write the output: {0}")]
    Output(#[source] std::io::Error),
}

fn main() {
    if let Err(err) = entry() {
        eprintln!("{}", err);
        std::process::exit(1)
    }
}

/// Splits on `\n`, dropping a trailing `\r` from each line.
fn lines(reader: impl BufRead) -> impl Iterator<Item = Result<Vec<u8>, Error>> {
    reader.split(b'\n').map(|line| {
        let mut line = line.map_err(Error::Input)?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Ok(line)
    })
}

fn entry() -> Result<(), Error> {
    let mut cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut trie: Trie<u64> = Trie::new();
    for line in lines(cli.input.lock()) {
        let line = line?;
        match trie.find_mut(&line) {
            Some(count) => *count += 1,
            None => {
                trie.insert(&line, 1);
            }
        }
    }
    info!(keys = trie.len(), nodes = trie.node_count(), "loaded input");

    if let Some(mut remove) = cli.remove.take() {
        let mut removed = 0usize;
        for line in lines(remove.lock()) {
            removed += usize::from(trie.delete(&line?));
        }
        debug!(removed, nodes = trie.node_count(), "removed lines");
    }

    let mut out = BufWriter::new(&mut cli.output);
    while trie.scan() {
        let Some((key, count)) = trie.current_pair() else {
            continue;
        };
        if cli.count {
            write!(out, "{count}\t").map_err(Error::Output)?;
        }
        out.write_all(&key).map_err(Error::Output)?;
        out.write_all(b"\n").map_err(Error::Output)?;
    }
    out.flush().map_err(Error::Output)
}
