//! Command dispatch

use std::io::{BufRead, Write};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, info, instrument};

use crate::application::services::{GuessOutcome, LineTransformer};
use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::domain::{BufferRef, Direction};
use crate::infrastructure::ServiceContainer;

/// Run the command described by `cli`.
///
/// `input`/`output` stand in for stdin/stdout so the dispatch can be tested.
pub fn execute_command<R, W>(
    cli: &Cli,
    container: &ServiceContainer,
    input: R,
    mut output: W,
) -> CliResult<()>
where
    R: BufRead,
    W: Write,
{
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut output);
        return Ok(());
    }
    if cli.show_config {
        return show_config(container, output);
    }

    let Some(verb) = cli.verb else {
        return Ok(());
    };
    let buffer = BufferRef::from_parts(cli.session_id.clone(), cli.buffer_id.clone());
    match verb.direction() {
        Some(direction) => shift(
            container,
            direction,
            cli.spec.as_deref(),
            buffer.as_ref(),
            input,
            output,
        ),
        None => {
            guess(container, buffer.as_ref());
            Ok(())
        }
    }
}

#[instrument(skip(container, input, output))]
fn shift<R: BufRead, W: Write>(
    container: &ServiceContainer,
    direction: Direction,
    spec: Option<&str>,
    buffer: Option<&BufferRef>,
    input: R,
    output: W,
) -> CliResult<()> {
    let unit = container.resolver().resolve(spec, buffer)?;
    info!("{:?} with unit {:?}", direction, unit.as_str());
    let stats = LineTransformer::new(unit).run(direction, input, output)?;
    info!("{} of {} lines changed", stats.changed, stats.lines);
    Ok(())
}

#[instrument(skip(container))]
fn guess(container: &ServiceContainer, buffer: Option<&BufferRef>) {
    match container.guesser().guess(buffer) {
        GuessOutcome::Skipped => debug!("guess skipped: TEPID/BUFID not set"),
        GuessOutcome::Persisted(unit) => info!("guessed {:?}", unit.as_str()),
        GuessOutcome::PersistFailed(unit) => {
            info!("guessed {:?}, marker not written", unit.as_str())
        }
    }
}

fn show_config<W: Write>(container: &ServiceContainer, mut output: W) -> CliResult<()> {
    let toml = container.settings.to_toml()?;
    output
        .write_all(toml.as_bytes())
        .and_then(|_| output.flush())
        .map_err(|e| CliError::io("write config", e))
}
