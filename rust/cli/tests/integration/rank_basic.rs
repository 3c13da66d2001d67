// D-series: rank command

use crate::helpers::cli_runner::CliRunner;
use std::io::Write;

const HAND_LIST: &str = "\
7C 4H 2C QS JD
2H 2C 2S 2D 3C
2C 3H 4D 5S 6C

AS TS QS JS KS
3H 4C 3D KS 8D
";

#[test]
fn d1_ranks_stdin_strongest_first() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_input(&["rank"], HAND_LIST);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert_eq!(
        res.stdout,
        "\
1. TS JS QS KS AS: Royal Flush
2. 2H 2C 2S 2D 3C: Four of a Kind
3. 2C 3H 4D 5S 6C: Straight
4. 3H 3D 4C 8D KS: Pair
5. 2C 4H 7C JD QS: High Card
"
    );
}

#[test]
fn d2_ranks_file_given_with_input_flag() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"2C 2H 7H TC 7S\r\nAH AD 3C 4S 5H\r\n3S 3D 8H 8C KD\r\n")
        .unwrap();
    let path = file.path().to_string_lossy().to_string();

    let cli = CliRunner::new().expect("init");
    let res = cli.run(&["rank", "--input", &path]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    let positions: Vec<&str> = res
        .stdout
        .lines()
        .map(|l| l.split(". ").next().unwrap())
        .collect();
    assert_eq!(positions, ["1", "1", "3"]);
    assert!(res.stdout.lines().last().unwrap().ends_with("Pair"));
}

#[test]
fn d3_reports_every_bad_line_and_prints_no_ranking() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_input(&["rank"], "AS TS QS JS KS\nAS AS QC JH TH\nAS TS\n");
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(res.stderr.contains("line 2: Duplicate card AS"));
    assert!(res.stderr.contains("line 3: Malformed hand"));
    assert!(res.stderr.contains("2 invalid hand(s)"));
}

#[test]
fn d4_empty_input_is_an_error() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_input(&["rank"], "\n\n");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("no hands to rank"));
}

#[test]
fn d5_missing_input_file_is_an_error() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run(&["rank", "--input", "/nonexistent/hands.txt"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot open /nonexistent/hands.txt"));
}
