use crate::commands::{
    handle_browse, handle_find, handle_neighbors, handle_show, handle_stats, Target,
};
use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use lsif_inspector_core::{
    BuildOptions, EventNesting, IndentOptions, LineTerminator, DEFAULT_INDENT_STEP,
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lsif-inspect")]
#[command(about = "Browse an LSIF dump as indented text and follow its edges")]
#[command(version)]
pub struct Cli {
    /// Spaces per `$event` nesting level (default: 4)
    #[arg(long = "indent-step", global = true, default_value_t = DEFAULT_INDENT_STEP)]
    pub indent_step: usize,

    /// Tolerate `$event` end markers without a matching begin
    #[arg(long = "lenient-events", global = true)]
    pub lenient_events: bool,

    /// Line terminator assumed for character offsets (default: platform)
    #[arg(long = "line-ending", global = true, value_enum)]
    pub line_ending: Option<LineEnding>,

    /// Decode lines in parallel
    #[arg(long = "parallel", global = true)]
    pub parallel: bool,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LineEnding {
    Lf,
    Crlf,
}

impl From<LineEnding> for LineTerminator {
    fn from(ending: LineEnding) -> Self {
        match ending {
            LineEnding::Lf => LineTerminator::Lf,
            LineEnding::Crlf => LineTerminator::CrLf,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the indented dump [aliases: cat]
    #[command(visible_alias = "cat")]
    Show {
        /// LSIF dump (one JSON record per line)
        file: PathBuf,

        /// Prefix every line with its index
        #[arg(short = 'n', long = "numbered")]
        numbered: bool,
    },

    /// Count vertices and edges by label [aliases: st]
    #[command(visible_alias = "st")]
    Stats {
        file: PathBuf,

        /// Emit JSON
        #[arg(short = 'j', long = "json")]
        json: bool,
    },

    /// Show an element and its direct neighbors [aliases: nb]
    #[command(visible_alias = "nb")]
    Neighbors {
        file: PathBuf,

        #[command(flatten)]
        target: TargetArgs,

        /// Emit JSON
        #[arg(short = 'j', long = "json")]
        json: bool,
    },

    /// Find text in the indented dump [aliases: search, f]
    #[command(visible_alias = "search", visible_alias = "f")]
    Find {
        file: PathBuf,

        /// Text to look for
        text: String,

        /// Report every match instead of the first
        #[arg(short = 'a', long = "all")]
        all: bool,

        /// Emit JSON
        #[arg(short = 'j', long = "json")]
        json: bool,
    },

    /// Navigate interactively with commands read from stdin [aliases: b]
    #[command(visible_alias = "b")]
    Browse { file: PathBuf },
}

/// Which element to start from; exactly one is required.
#[derive(Args, Debug, Clone, Copy)]
#[group(required = true, multiple = false)]
pub struct TargetArgs {
    /// Vertex or edge id (vertices win on collisions)
    #[arg(long = "id")]
    pub id: Option<i64>,

    /// Zero-based line index
    #[arg(short = 'l', long = "line")]
    pub line: Option<usize>,

    /// Character offset into the indented dump
    #[arg(short = 'o', long = "offset")]
    pub offset: Option<usize>,
}

impl From<TargetArgs> for Target {
    fn from(args: TargetArgs) -> Self {
        match (args.id, args.line, args.offset) {
            (Some(id), _, _) => Target::Id(id),
            (_, Some(line), _) => Target::Line(line),
            (_, _, Some(offset)) => Target::Offset(offset),
            // clap enforces one of the three
            (None, None, None) => Target::Line(0),
        }
    }
}

impl Cli {
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            indent: IndentOptions {
                step: self.indent_step,
                nesting: if self.lenient_events {
                    EventNesting::Lenient
                } else {
                    EventNesting::Strict
                },
            },
            terminator: self
                .line_ending
                .map(LineTerminator::from)
                .unwrap_or_default(),
            parallel_decode: self.parallel,
        }
    }

    pub fn run(self) -> Result<()> {
        if self.no_color {
            colored::control::set_override(false);
        }

        let options = self.build_options();
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self.command {
            Commands::Show { file, numbered } => handle_show(&file, &options, numbered, &mut out)?,
            Commands::Stats { file, json } => handle_stats(&file, &options, json, &mut out)?,
            Commands::Neighbors { file, target, json } => {
                handle_neighbors(&file, &options, target.into(), json, &mut out)?
            }
            Commands::Find {
                file,
                text,
                all,
                json,
            } => handle_find(&file, &options, &text, all, json, &mut out)?,
            Commands::Browse { file } => {
                let stdin = io::stdin();
                handle_browse(&file, &options, stdin.lock(), &mut out)?
            }
        }

        Ok(())
    }
}
