use crate::errors::InputError;
use crate::graph::VertexId;
use crate::graph_algos::link_state::LinkState;
use crate::input::{GraphDescription, Tokens};
use crate::report::report;

use std::{fs::File, io::{BufRead, BufReader, Write}, path::PathBuf};
use eyre::Result;
use log::{info, warn};


/// What the caller asked for; every field may be missing
#[derive(Clone, Debug)]
pub struct Request {
    pub file: Option<PathBuf>,
    pub source: Option<String>,
    pub default_input: PathBuf,
}


/// Where the graph description comes from
#[derive(Debug)]
enum GraphSource {
    File(File),
    Console,
}


/// One shot run: acquire input, build the graph, compute and print every path
/// Bad input prints a diagnostic on `out` and skips the computation.
pub fn run<R, W>(request: &Request, console: &mut Tokens<R>, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let (graph_source, source) = acquire(request, console, out)?;

    let description = match graph_source {
        GraphSource::File(file) => GraphDescription::read(&mut Tokens::new(BufReader::new(file))),
        GraphSource::Console => GraphDescription::read(console),
    };

    let graph = match description.and_then(|d| d.build()) {
        Ok(graph) => graph,
        Err(InputError::Io(error)) => return Err(error.into()),
        Err(error) => {
            warn!("{error}");
            writeln!(out, "Bad Input")?;
            return Ok(());
        }
    };

    if source >= graph.len() {
        writeln!(out, "Source Point Invalid: Try Again")?;
        return Ok(());
    }

    info!("computing paths from {source} over {} vertices", graph.len());
    let tree = LinkState::default().compute_tree(&graph, source)?;

    for line in report(&tree, &graph) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}


/// Resolve the graph source and the source vertex, falling back to the
/// default input file and finally to the console
fn acquire<R, W>(request: &Request, console: &mut Tokens<R>, out: &mut W) -> Result<(GraphSource, VertexId)>
where
    R: BufRead,
    W: Write,
{
    match requested(request, console, out)? {
        Some((file, source)) => return Ok((GraphSource::File(file), source)),
        None => writeln!(out, "Bad Input: Using defaults")?,
    }

    match File::open(&request.default_input) {
        Ok(file) => Ok((GraphSource::File(file), 0)),
        Err(error) => {
            warn!("default input {}: {error}", request.default_input.display());
            writeln!(out, "Bad Path in defaults: Please input data manually or try again.")?;
            writeln!(out, "Enter # of nodes followed by any links, -1 to exit")?;
            out.flush()?;
            Ok((GraphSource::Console, 0))
        }
    }
}


/// File and source from the request, or prompted on the console when no file was given
/// None if either one cannot be had
fn requested<R, W>(request: &Request, console: &mut Tokens<R>, out: &mut W) -> Result<Option<(File, VertexId)>>
where
    R: BufRead,
    W: Write,
{
    let (path, source) = match &request.file {
        Some(path) => (path.clone(), request.source.clone()),
        None => {
            writeln!(out, "Input your file path:")?;
            out.flush()?;
            let Some(path) = console.next_token()? else {
                return Ok(None);
            };

            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    warn!("{path}: {error}");
                    return Ok(None);
                }
            };

            writeln!(out, "Input source point:")?;
            out.flush()?;
            let source = console.next_token()?;
            return Ok(source.and_then(|s| s.parse().ok()).map(|source| (file, source)));
        }
    };

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(error) => {
            warn!("{}: {error}", path.display());
            return Ok(None);
        }
    };

    Ok(source.and_then(|s| s.parse().ok()).map(|source| (file, source)))
}
