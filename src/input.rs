use crate::errors::InputError;
use crate::graph::{Graph, VertexId};

use std::{collections::VecDeque, io::BufRead, str::FromStr};
use log::debug;


/// Token that ends an edge list
pub const END_OF_EDGES: &str = "-1";


/// Whitespace separated tokens read lazily, one line at a time
/// Lines are only pulled when a token is needed, so console input is
/// consumed as it is typed instead of waiting for end of input.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {

    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn fill(&mut self) -> Result<bool, InputError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(true)
    }

    pub fn peek(&mut self) -> Result<Option<&str>, InputError> {
        if !self.fill()? {
            return Ok(None);
        }
        Ok(self.pending.front().map(String::as_str))
    }

    pub fn next_token(&mut self) -> Result<Option<String>, InputError> {
        if !self.fill()? {
            return Ok(None);
        }
        Ok(self.pending.pop_front())
    }

    /// Next token parsed as `T`, a missing or unparsable token is malformed input
    pub fn parse_next<T: FromStr>(&mut self, what: &str) -> Result<T, InputError> {
        let token = self
            .next_token()?
            .ok_or_else(|| InputError::MalformedInput(format!("expected {what}, found end of input")))?;

        token
            .parse()
            .map_err(|_| InputError::MalformedInput(format!("expected {what}, found {token:?}")))
    }
}


/// One `<a> <b> <cost>` triple
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeSpec {
    pub a: VertexId,
    pub b: VertexId,
    pub cost: f32,
}


/// Parsed graph description: `<node_count> { <a> <b> <cost> } [-1]`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphDescription {
    pub node_count: usize,
    pub edges: Vec<EdgeSpec>,
}

impl GraphDescription {

    /// Read a description, stopping at the `-1` terminator or end of input
    pub fn read<R: BufRead>(tokens: &mut Tokens<R>) -> Result<Self, InputError> {
        let node_count = tokens.parse_next("node count")?;
        let mut edges = Vec::new();

        while let Some(token) = tokens.peek()? {
            if token == END_OF_EDGES {
                tokens.next_token()?;
                break;
            }

            edges.push(EdgeSpec {
                a: tokens.parse_next("edge start")?,
                b: tokens.parse_next("edge end")?,
                cost: tokens.parse_next("edge cost")?,
            });
        }

        debug!("read {} nodes and {} edges", node_count, edges.len());
        Ok(Self { node_count, edges })
    }

    pub fn parse(text: &str) -> Result<Self, InputError> {
        Self::read(&mut Tokens::new(text.as_bytes()))
    }

    /// Graph with every edge added in both directions
    pub fn build(&self) -> Result<Graph<f32>, InputError> {
        let mut graph = Graph::new(self.node_count);
        for edge in &self.edges {
            graph.add_edge(edge.a, edge.b, edge.cost)?;
        }
        Ok(graph)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_across_lines() {
        let mut tokens = Tokens::new("4 0 1\n\n  1.5 -1\n".as_bytes());

        assert_eq!(tokens.peek().unwrap(), Some("4"));
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("4"));
        assert_eq!(tokens.parse_next::<usize>("a").unwrap(), 0);
        assert_eq!(tokens.parse_next::<usize>("b").unwrap(), 1);
        assert_eq!(tokens.parse_next::<f32>("cost").unwrap(), 1.5);
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("-1"));
        assert_eq!(tokens.next_token().unwrap(), None);
    }

    #[test]
    fn test_read_description() {
        let text = "4\n0 1 1\n1 2 2\n0 2 4\n2 3 1\n-1\n";
        let description = GraphDescription::parse(text).unwrap();

        assert_eq!(description.node_count, 4);
        assert_eq!(description.edges.len(), 4);
        assert_eq!(description.edges[2], EdgeSpec { a: 0, b: 2, cost: 4.0 });
    }

    #[test]
    fn test_read_stops_at_terminator() {
        let mut tokens = Tokens::new("2 0 1 3 -1 garbage".as_bytes());
        let description = GraphDescription::read(&mut tokens).unwrap();

        assert_eq!(description.edges.len(), 1);
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("garbage"));
    }

    #[test]
    fn test_read_without_terminator() {
        let description = GraphDescription::parse("3 0 1 2.5 1 2 1").unwrap();
        assert_eq!(description.edges.len(), 2);
    }

    #[test]
    fn test_read_node_count_only() {
        let description = GraphDescription::parse("1 -1").unwrap();
        assert_eq!(description, GraphDescription { node_count: 1, edges: vec![] });
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(GraphDescription::parse(""), Err(InputError::MalformedInput(_))));
        assert!(matches!(GraphDescription::parse("x"), Err(InputError::MalformedInput(_))));
        assert!(matches!(GraphDescription::parse("3 0 1"), Err(InputError::MalformedInput(_))));
        assert!(matches!(GraphDescription::parse("3 0 one 2"), Err(InputError::MalformedInput(_))));
        assert!(matches!(GraphDescription::parse("3 0 1 cheap"), Err(InputError::MalformedInput(_))));
    }

    #[test]
    fn test_build_graph() {
        let graph = GraphDescription::parse("3 0 1 2 1 2 0.5 -1").unwrap().build().unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_cost(1, 0).unwrap(), 2.0);
        assert_eq!(graph.edge_cost(2, 1).unwrap(), 0.5);
    }

    #[test]
    fn test_build_rejects_out_of_range_edge() {
        let description = GraphDescription::parse("2 0 2 1 -1").unwrap();
        assert!(matches!(description.build(), Err(InputError::MalformedInput(_))));
    }
}
