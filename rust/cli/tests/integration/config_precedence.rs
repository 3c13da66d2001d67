// I-series: configuration precedence (default < file < env < flag)

use crate::helpers::cli_runner::CliRunner;

use serde_json::Value;
use std::io::Write;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f
}

#[test]
fn i1_cfg_shows_defaults() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run(&["cfg"]);
    assert_eq!(res.exit_code, 0);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();

    assert_eq!(json["locale"]["value"].as_str(), Some("en"));
    assert_eq!(json["locale"]["source"].as_str(), Some("default"));
    assert_eq!(json["unicode_suits"]["value"].as_bool(), Some(false));
    assert_eq!(json["unicode_suits"]["source"].as_str(), Some("default"));
}

#[test]
fn i2_file_values_apply_to_output() {
    let f = config_file("locale = \"ru\"\nunicode_suits = true\n");
    let path = f.path().to_string_lossy().to_string();
    let cli = CliRunner::new().expect("init");

    let res = cli.run_with_env(&["cfg"], &[("POKERHAND_CONFIG", path.as_str())]);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["locale"]["source"].as_str(), Some("file"));
    assert_eq!(json["unicode_suits"]["source"].as_str(), Some("file"));

    let res = cli.run_with_env(
        &["classify", "2H 2C 2S 2D 3C"],
        &[("POKERHAND_CONFIG", path.as_str())],
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert_eq!(res.stdout, "2♥ 2♣ 2♠ 2♦ 3♣: Каре (старшая карта 3)\n");
}

#[test]
fn i3_env_overrides_file_and_flag_overrides_env() {
    let f = config_file("locale = \"en\"\n");
    let path = f.path().to_string_lossy().to_string();
    let cli = CliRunner::new().expect("init");
    let env = [("POKERHAND_CONFIG", path.as_str()), ("POKERHAND_LOCALE", "ru")];

    let res = cli.run_with_env(&["cfg"], &env);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["locale"]["value"].as_str(), Some("ru"));
    assert_eq!(json["locale"]["source"].as_str(), Some("env"));

    let res = cli.run_with_env(&["cfg", "--locale", "en"], &env);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["locale"]["value"].as_str(), Some("en"));
    assert_eq!(json["locale"]["source"].as_str(), Some("cli"));
}

#[test]
fn i4_invalid_env_value_is_a_config_error() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_env(&["cfg"], &[("POKERHAND_UNICODE_SUITS", "maybe")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Configuration error"));
}

#[test]
fn i5_unknown_file_key_is_rejected() {
    let f = config_file("seed = 42\n");
    let path = f.path().to_string_lossy().to_string();
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_env(&["cfg"], &[("POKERHAND_CONFIG", path.as_str())]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot parse config file"));
}
