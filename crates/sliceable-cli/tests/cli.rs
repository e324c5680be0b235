use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn slice(config_dir: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_slice"))
        .args(args)
        .env("SLICEABLE_CONFIG", config_dir.join("config.toml"))
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).unwrap();
        }
    }

    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn slices_text_argument() {
    let dir = TempDir::new().unwrap();
    let output = slice(dir.path(), &["::-1", "Fòô Bàř"], None);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "řàB ôòF\n");
}

#[test]
fn index_argument_prints_one_code_point() {
    let dir = TempDir::new().unwrap();
    let output = slice(dir.path(), &["-2", "Fòô Bàř"], None);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "à\n");
}

#[test]
fn slices_each_stdin_line() {
    let dir = TempDir::new().unwrap();
    let output = slice(dir.path(), &["1:5:3"], Some("Fòô Bàř\n0123456\n"));

    assert!(output.status.success());
    assert_eq!(stdout(&output), "òB\n14\n");
}

#[test]
fn whole_flag_slices_stdin_once() {
    let dir = TempDir::new().unwrap();
    let output = slice(dir.path(), &["--whole", "::-1"], Some("ab\ncd\n"));

    assert!(output.status.success());
    assert_eq!(stdout(&output), "dc\nba\n");
}

#[test]
fn invalid_expression_fails_before_reading_input() {
    let dir = TempDir::new().unwrap();
    let output = slice(dir.path(), &["1:2:3:4", "Fòô Bàř"], None);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Too many slice arguments"), "{stderr}");
}

#[test]
fn failed_lines_set_exit_code() {
    let dir = TempDir::new().unwrap();
    let output = slice(dir.path(), &["1:2:0"], Some("abc\n"));

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr, "line 1: Slice step cannot be 0\n");
}

#[test]
fn config_file_selects_json_output() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "output = \"json\"\nencoding = \"ISO-8859-2\"\n",
    )
    .unwrap();

    let output = slice(dir.path(), &["4:", "Fòô Bàř"], None);

    assert!(output.status.success());
    let record: serde_json::Value = serde_json::from_str(stdout(&output).trim_end()).unwrap();
    assert_eq!(record["result"], "Bàř");
    assert_eq!(record["encoding"], "ISO-8859-2");
    assert_eq!(record["expr"]["range"]["start"], 4);
}

#[test]
fn flags_override_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "output = \"json\"\n").unwrap();

    let output = slice(dir.path(), &["--text", "4:6", "Fòô Bàř"], None);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Bà\n");
}

#[test]
fn help_prints_usage() {
    let dir = TempDir::new().unwrap();
    let output = slice(dir.path(), &["--help"], None);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage: slice [OPTIONS] <EXPR> [TEXT]"));
}

#[test]
fn usage_error_exits_with_two() {
    let dir = TempDir::new().unwrap();
    let output = slice(dir.path(), &["--json", "--text", "1:"], None);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
}

#[test]
fn json_failures_are_also_reported_on_stderr() {
    let dir = TempDir::new().unwrap();
    let output = slice(dir.path(), &["--json", "5"], Some("ab\n"));

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr.clone()).unwrap();
    assert_eq!(stderr, "line 1: Index 5 is out of bounds for length 2\n");
    let record: serde_json::Value = serde_json::from_str(stdout(&output).trim_end()).unwrap();
    assert_eq!(record["error"], "Index 5 is out of bounds for length 2");
}

#[test]
fn save_config_persists_effective_options() {
    let dir = TempDir::new().unwrap();
    let output = slice(
        dir.path(),
        &["--save-config", "--json", "--encoding=ISO-8859-2", "0", "abc"],
        None,
    );
    assert!(output.status.success());

    let saved = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(saved.contains("output = \"json\""), "{saved}");
    assert!(saved.contains("encoding = \"ISO-8859-2\""), "{saved}");

    let output = slice(dir.path(), &["1", "abc"], None);
    let record: serde_json::Value = serde_json::from_str(stdout(&output).trim_end()).unwrap();
    assert_eq!(record["result"], "b");
    assert_eq!(record["encoding"], "ISO-8859-2");
}
