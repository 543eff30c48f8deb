//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum, ValueHint};

use crate::domain::Direction;

/// Indent/deindent stdin for the teddy editor, or guess a buffer's indentation
#[derive(Parser, Debug)]
#[command(name = "bindent")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Config file (default: $XDG_CONFIG_HOME/bindent/bindent.toml)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Editor session id
    #[arg(long, env = "TEPID")]
    pub session_id: Option<String>,

    /// Editor buffer id
    #[arg(long, env = "BUFID")]
    pub buffer_id: Option<String>,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,

    /// What to do: `+` indent stdin, `-` deindent stdin, `guess` the buffer's indentation
    #[arg(value_enum, required_unless_present_any = ["completions", "show_config"])]
    pub verb: Option<Verb>,

    /// Indent unit: <count>s for spaces, <count>[t] for tabs (e.g. 4s, 2)
    #[arg(allow_hyphen_values = true)]
    pub spec: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    /// Indent every line of stdin
    #[value(name = "+")]
    Indent,
    /// Deindent every line of stdin
    #[value(name = "-")]
    Deindent,
    /// Guess the buffer's indentation and persist it
    Guess,
}

impl Verb {
    /// Stream direction for `+`/`-`; `None` for `guess`.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Verb::Indent => Some(Direction::Indent),
            Verb::Deindent => Some(Direction::Deindent),
            Verb::Guess => None,
        }
    }
}
