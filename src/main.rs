use std::{io, path::PathBuf};

use clap::Parser;
use eyre::Result;
use linkstate::{input::Tokens, session::{self, Request}};

/// Print the shortest path and cost from a source vertex to every other vertex
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Graph description: node count, `a b cost` triples, then -1
    file: Option<PathBuf>,

    /// Source vertex id
    source: Option<String>,

    /// Graph read when FILE or SOURCE is unusable
    #[arg(long, env = "LINKSTATE_DEFAULT_INPUT", default_value = "GraphInput")]
    default_input: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let request = Request {
        file: cli.file,
        source: cli.source,
        default_input: cli.default_input,
    };

    let mut console = Tokens::new(io::stdin().lock());
    let mut out = io::stdout().lock();
    session::run(&request, &mut console, &mut out)
}
