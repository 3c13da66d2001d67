// A-series: top-level CLI behaviour

use crate::helpers::cli_runner::CliRunner;

#[test]
fn a1_help_lists_all_commands() {
    let cli = CliRunner::new().expect("CliRunner should initialize with binary path");

    let res = cli.run(&["--help"]);

    assert_eq!(res.exit_code, 0, "--help should exit with code 0");
    for cmd in ["classify", "compare", "rank", "cfg"] {
        assert!(res.stdout.contains(cmd), "help should list `{}`", cmd);
    }
}

#[test]
fn a2_version_prints_version_and_exits_zero() {
    let cli = CliRunner::new().expect("CliRunner should initialize");
    let res = cli.run(&["--version"]);
    assert_eq!(res.exit_code, 0, "--version should exit 0");
    assert!(res.stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn a3_unknown_subcommand_shows_commands_on_stderr() {
    let cli = CliRunner::new().expect("CliRunner should initialize");
    let res = cli.run(&["deal"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(
        res.stderr.contains("Commands:"),
        "stderr should contain the Commands list\n---stderr---\n{}\n-----------",
        res.stderr
    );
    assert!(res.stderr.contains("classify"));
}

#[test]
fn a4_invalid_locale_flag_is_rejected_by_parser() {
    let cli = CliRunner::new().expect("CliRunner should initialize");
    let res = cli.run(&["classify", "--locale", "fr", "AS TS QS JS KS"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("fr"));
}

#[test]
fn a5_debug_logging_goes_to_stderr_only() {
    let cli = CliRunner::new().expect("CliRunner should initialize");
    let res = cli.run_with_env(&["classify", "AS TS QS JS KS"], &[("POKERHAND_LOG", "debug")]);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout, "TS JS QS KS AS: Royal Flush (high card A)\n");
    assert!(
        res.stderr.contains("classified hand"),
        "stderr should carry the debug event\n---stderr---\n{}",
        res.stderr
    );
}

#[test]
fn a6_default_logging_is_quiet_on_success() {
    let cli = CliRunner::new().expect("CliRunner should initialize");
    let res = cli.run(&["classify", "AS TS QS JS KS"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.is_empty(), "unexpected stderr: {}", res.stderr);
}
