//! End-to-end tests of command dispatch with in-memory stdin/stdout

mod common;

use clap::Parser;
use rstest::rstest;

use bindent::cli::{execute_command, Cli, CliError, Verb};
use bindent::config::Settings;
use bindent::exitcode;
use bindent::infrastructure::ServiceContainer;

use common::{TeddyState, BUFFER, SESSION};

/// Parse `args`, ignoring any TEPID/BUFID of the test runner's environment.
fn parse(args: &[&str]) -> Cli {
    let mut cli = Cli::try_parse_from(std::iter::once("bindent").chain(args.iter().copied()))
        .expect("parse args");
    if !args.contains(&"--session-id") {
        cli.session_id = None;
    }
    if !args.contains(&"--buffer-id") {
        cli.buffer_id = None;
    }
    cli
}

fn run(container: &ServiceContainer, args: &[&str], input: &str) -> Result<String, CliError> {
    let cli = parse(args);
    let mut out = Vec::new();
    execute_command(&cli, container, input.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out).expect("utf8 output"))
}

fn ids() -> Vec<&'static str> {
    vec!["--session-id", SESSION, "--buffer-id", BUFFER]
}

#[rstest]
#[case(&["+"], Verb::Indent)]
#[case(&["-"], Verb::Deindent)]
#[case(&["guess"], Verb::Guess)]
#[case(&["-", "4s"], Verb::Deindent)]
fn given_verb_when_parsing_then_recognized(#[case] args: &[&str], #[case] verb: Verb) {
    assert_eq!(parse(args).verb, Some(verb));
}

#[test]
fn given_leading_dash_spec_when_parsing_then_taken_as_spec() {
    let cli = parse(&["+", "-1s"]);

    assert_eq!(cli.verb, Some(Verb::Indent));
    assert_eq!(cli.spec.as_deref(), Some("-1s"));
}

#[test]
fn given_no_id_args_when_parsing_then_ids_unset() {
    let cli = parse(&["+"]);

    assert!(cli.session_id.is_none());
    assert!(cli.buffer_id.is_none());
}

#[test]
fn given_unknown_verb_when_parsing_then_rejected() {
    assert!(Cli::try_parse_from(["bindent", "indent"]).is_err());
}

#[test]
fn given_four_space_spec_when_indenting_then_prefixes_four_spaces() {
    let container = ServiceContainer::new(Settings::default());

    let out = run(&container, &["+", "4s"], "foo\n").unwrap();

    assert_eq!(out, "    foo\n");
}

#[test]
fn given_bare_count_spec_when_deindenting_then_strips_two_tabs() {
    let container = ServiceContainer::new(Settings::default());

    let out = run(&container, &["-", "2"], "\t\tfoo\n").unwrap();

    assert_eq!(out, "foo\n");
}

#[test]
fn given_no_spec_and_no_ids_when_indenting_then_single_tab() {
    let state = TeddyState::new();
    let container = state.container();

    let out = run(&container, &["+"], "bar\n").unwrap();

    assert_eq!(out, "\tbar\n");
}

#[test]
fn given_double_tab_marker_when_deindenting_space_led_line_then_strips_one_space() {
    let state = TeddyState::new();
    state.write_marker("\t\t");
    let mut args = ids();
    args.push("-");

    let out = run(&state.container(), &args, " foo\n").unwrap();

    assert_eq!(out, "foo\n");
}

#[test]
fn given_guess_then_shift_when_no_spec_then_uses_guessed_unit() {
    let state = TeddyState::new();
    state.write_body("a:\n  b\n  c\n");
    let container = state.container();

    let mut guess = ids();
    guess.push("guess");
    assert_eq!(run(&container, &guess, "ignored\n").unwrap(), "");

    let mut indent = ids();
    indent.push("+");
    let out = run(&container, &indent, "x\ny").unwrap();

    assert_eq!(out, "  x\n  y");
}

#[test]
fn given_missing_body_and_unwritable_marker_when_guessing_then_succeeds_silently() {
    let state = TeddyState::new();
    std::fs::remove_dir_all(state.buffer_dir()).unwrap();
    let mut args = ids();
    args.push("guess");

    let out = run(&state.container(), &args, "").unwrap();

    assert_eq!(out, "");
}

#[test]
fn given_malformed_spec_when_indenting_then_usage_error() {
    let container = ServiceContainer::new(Settings::default());

    let err = run(&container, &["+", "xs"], "foo\n").unwrap_err();

    assert_eq!(err.exit_code(), exitcode::USAGE);
    assert!(!err.is_broken_pipe());
}

#[rstest]
#[case("-1s")]
#[case("18446744073709551615s")]
#[case("70000")]
fn given_unusable_spec_when_shifting_then_usage_error_not_panic(#[case] spec: &str) {
    let container = ServiceContainer::new(Settings::default());

    let err = run(&container, &["-", spec], "foo\n").unwrap_err();

    assert_eq!(err.exit_code(), exitcode::USAGE);
    assert!(err.to_string().contains(spec));
}

#[test]
fn given_show_config_when_executing_then_prints_toml() {
    let state = TeddyState::new();

    let out = run(&state.container(), &["--show-config"], "").unwrap();

    assert!(out.contains("session_prefix = \"teddy.\""));
    assert!(out.contains("guess_line_limit = 200"));
}

#[test]
fn given_completions_flag_when_executing_then_prints_script() {
    let container = ServiceContainer::new(Settings::default());

    let out = run(&container, &["--completions", "bash"], "").unwrap();

    assert!(out.contains("bindent"));
}
