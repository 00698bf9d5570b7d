//! CLI integration tests
//!
//! Tests for the devkit command-line interface.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn devkit() -> Command {
    Command::cargo_bin("devkit").unwrap()
}

mod fmt_command {
    use super::*;

    #[test]
    fn fmt_single_file_to_stdout() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("query.sql");
        fs::write(&file_path, "select id, name from users").unwrap();

        devkit()
            .arg("fmt")
            .arg(&file_path)
            .assert()
            .success()
            .stdout(predicate::str::contains("SELECT"))
            .stdout(predicate::str::contains("FROM"));
    }

    #[test]
    fn fmt_single_file_in_place() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("query.sql");
        fs::write(&file_path, "select id from users").unwrap();

        devkit()
            .arg("fmt")
            .arg("--write")
            .arg(&file_path)
            .assert()
            .success();

        let content = fs::read_to_string(&file_path).unwrap();
        assert!(content.contains("SELECT"));
        assert!(!content.contains("select"));
    }

    #[test]
    fn fmt_directory_recursively() {
        let temp = TempDir::new().unwrap();
        let sub = temp.path().join("nested");
        fs::create_dir(&sub).unwrap();
        let file_path = sub.join("query.sql");
        fs::write(&file_path, "select a from t").unwrap();

        devkit()
            .arg("fmt")
            .arg("--write")
            .arg(temp.path())
            .assert()
            .success();

        assert!(fs::read_to_string(&file_path).unwrap().contains("SELECT"));
    }

    #[test]
    fn fmt_from_stdin() {
        devkit()
            .arg("fmt")
            .arg("-")
            .write_stdin("select a from t")
            .assert()
            .success()
            .stdout(predicate::str::contains("FROM"));
    }

    #[test]
    fn fmt_honors_case_flag() {
        devkit()
            .args(["fmt", "--case", "lower", "-"])
            .write_stdin("SELECT A FROM T")
            .assert()
            .success()
            .stdout(predicate::str::contains("select"));
    }

    #[test]
    fn fmt_honors_indent_flag() {
        devkit()
            .args(["fmt", "--indent", "4", "-"])
            .write_stdin("select a from t")
            .assert()
            .success()
            .stdout(predicate::str::contains("    a"));
    }

    #[test]
    fn unterminated_literal_warns_on_stderr() {
        devkit()
            .arg("fmt")
            .arg("-")
            .write_stdin("select 'oops from t")
            .assert()
            .success()
            .stderr(predicate::str::contains("unterminated string literal"));
    }

    #[test]
    fn empty_stdin_is_an_error() {
        devkit()
            .arg("fmt")
            .arg("-")
            .write_stdin("")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("empty"));
    }
}

mod check_command {
    use super::*;

    #[test]
    fn formatted_file_passes() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("query.sql");
        fs::write(&file_path, "SELECT\n  a\nFROM\n  t\n").unwrap();

        devkit().arg("check").arg(&file_path).assert().success();
    }

    #[test]
    fn unformatted_file_exits_one() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("query.sql");
        fs::write(&file_path, "select a from t").unwrap();

        devkit()
            .arg("check")
            .arg(&file_path)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("needs formatting"));
    }
}

mod run_command {
    use super::*;

    #[test]
    fn run_base64_encode() {
        devkit()
            .args([
                "run",
                "base64_tool",
                "--args",
                r#"{"operation": "encode", "input": "hi"}"#,
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("aGk="));
    }

    #[test]
    fn run_hash_generator() {
        devkit()
            .args(["run", "hash_generator", "--args", r#"{"input": "abc"}"#])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            ));
    }

    #[test]
    fn run_sql_formatter() {
        devkit()
            .args([
                "run",
                "sql_formatter",
                "--args",
                r#"{"sql": "select a from t"}"#,
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("SELECT"));
    }

    #[test]
    fn tool_failure_exits_one() {
        devkit()
            .args([
                "run",
                "base64_tool",
                "--args",
                r#"{"operation": "decode", "input": "!!!"}"#,
            ])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Failed to decode"));
    }

    #[test]
    fn unknown_tool_exits_two() {
        devkit()
            .args(["run", "no_such_tool"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("unknown tool"));
    }

    #[test]
    fn invalid_args_json_exits_two() {
        devkit()
            .args(["run", "base64_tool", "--args", "not json"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("not valid JSON"));
    }
}

mod list_command {
    use super::*;

    #[test]
    fn lists_all_tools() {
        let assert = devkit().arg("list").assert().success();
        let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
        for name in [
            "sql_formatter",
            "base64_tool",
            "hash_generator",
            "uuid_generator",
            "json_formatter",
            "jwt_decoder",
            "timestamp_tool",
            "color_converter",
        ] {
            assert!(stdout.contains(name), "{name} missing from list output");
        }
    }
}
