use super::stats::write_stats;
use super::utils::{load_graph, print_error, select, write_neighborhood, Target};
use anyhow::Result;
use lsif_inspector_core::{BuildOptions, FindSession, LsifGraph, Match};
use std::io::{BufRead, Write};
use std::path::Path;

const HELP: &str = "\
Commands:
  line N      select line N (zero-based)
  offset N    select the line containing character offset N
  id N        select the vertex (or else edge) with id N
  find TEXT   jump to the first occurrence of TEXT
  next        jump to the next occurrence of the last search
  stats       show label counts
  help        show this text
  quit        leave";

pub fn handle_browse<R: BufRead, W: Write>(
    path: &Path,
    options: &BuildOptions,
    input: R,
    out: &mut W,
) -> Result<()> {
    let graph = load_graph(path, options)?;
    Browser::new(&graph).run(input, out)
}

/// Interactive navigation state: the caret and the find session.
pub struct Browser<'g> {
    graph: &'g LsifGraph,
    session: FindSession,
    caret: usize,
}

impl<'g> Browser<'g> {
    pub fn new(graph: &'g LsifGraph) -> Self {
        Self {
            graph,
            session: FindSession::new(),
            caret: 0,
        }
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "Loaded {} lines. Type `help` for commands.",
            self.graph.lines().len()
        )?;

        for line in input.lines() {
            let line = line?;
            if !self.execute(line.trim(), out)? {
                break;
            }
        }
        Ok(())
    }

    /// Runs one command; `false` ends the session.
    pub fn execute<W: Write>(&mut self, command: &str, out: &mut W) -> Result<bool> {
        let (name, argument) = command.split_once(' ').unwrap_or((command, ""));
        let argument = argument.trim();

        match name {
            "" => {}
            "quit" | "q" | "exit" => return Ok(false),
            "help" | "?" => writeln!(out, "{HELP}")?,
            "line" | "l" => match argument.parse() {
                Ok(line) => self.show(Target::Line(line), out)?,
                Err(_) => print_error(out, "usage: line N")?,
            },
            "offset" | "o" => match argument.parse() {
                Ok(offset) => self.show(Target::Offset(offset), out)?,
                Err(_) => print_error(out, "usage: offset N")?,
            },
            "id" | "i" => match argument.parse() {
                Ok(id) => self.show(Target::Id(id), out)?,
                Err(_) => print_error(out, "usage: id N")?,
            },
            "find" | "f" => {
                let query = match (argument, self.session.last_query()) {
                    ("", Some(last)) => last.to_string(),
                    ("", None) => {
                        print_error(out, "usage: find TEXT")?;
                        return Ok(true);
                    }
                    (text, _) => text.to_string(),
                };
                let found = self.session.find(self.graph.lines(), &query);
                self.jump(found, out)?;
            }
            "next" | "n" => {
                if self.session.last_query().is_none() {
                    print_error(out, "nothing to repeat, use `find TEXT` first")?;
                } else {
                    let found = self.session.find_next(self.graph.lines(), self.caret);
                    self.jump(found, out)?;
                }
            }
            "stats" => write_stats(out, &self.graph.stats())?,
            other => print_error(out, &format!("unknown command `{other}`, try `help`"))?,
        }
        Ok(true)
    }

    fn show<W: Write>(&mut self, target: Target, out: &mut W) -> Result<()> {
        let element = match select(self.graph, target) {
            Ok(element) => element,
            Err(err) => return print_error(out, &err.to_string()),
        };

        // a selection always covers the whole line
        if let Some(start) = self.graph.lines().offset_for_line_index(element.line_number) {
            self.caret = start;
        }

        let neighbors = self.graph.neighbors(element);
        write_neighborhood(out, self.graph, element, &neighbors)
    }

    fn jump<W: Write>(&mut self, found: Option<Match>, out: &mut W) -> Result<()> {
        let Some(found) = found else {
            let query = self.session.last_query().unwrap_or_default();
            return print_error(out, &format!("no match for {query:?}"));
        };

        writeln!(out, "🔍 match at offset {} (line {})", found.offset, found.line)?;
        self.show(Target::Line(found.line), out)?;
        self.caret = found.offset;
        Ok(())
    }
}
