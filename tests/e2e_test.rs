/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CYCLE_FIXTURE: &str = "tests/fixtures/cycle.txt";
const DIAMOND_FIXTURE: &str = "tests/fixtures/diamond.txt";
const DEEP_FIXTURE: &str = "tests/fixtures/deep.txt";

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution against a fixture
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("maven-depgraph")
            .args(["-p", "A", "-r", DIAMOND_FIXTURE, "-t"])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("maven-depgraph").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("maven-depgraph").arg("--version").assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("maven-depgraph")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("maven-depgraph")
            .args(["-p", "A", "-r", DIAMOND_FIXTURE, "-t", "-f", "svg"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Depth outside 1..=100
    #[test]
    fn test_exit_code_depth_out_of_range() {
        cargo_bin_cmd!("maven-depgraph")
            .args(["-p", "A", "-r", DIAMOND_FIXTURE, "-t", "-d", "0"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Missing fixture file in test mode
    #[test]
    fn test_exit_code_missing_fixture() {
        cargo_bin_cmd!("maven-depgraph")
            .args(["-p", "A", "-r", "tests/fixtures/none.txt", "-t"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Test repository"));
    }

    /// Exit code 2: Repository that is neither a URL nor test mode
    #[test]
    fn test_exit_code_repository_not_url() {
        cargo_bin_cmd!("maven-depgraph")
            .args(["-p", "A", "-r", DIAMOND_FIXTURE])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("http:// or https://"));
    }

    /// Exit code 2: Malformed root package
    #[test]
    fn test_exit_code_malformed_package() {
        cargo_bin_cmd!("maven-depgraph")
            .args(["-p", "a:b:c", "-r", DIAMOND_FIXTURE, "-t"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Malformed package reference"));
    }

    /// Exit code 3: Application error - output directory does not exist
    #[test]
    fn test_exit_code_application_error_unwritable_output() {
        cargo_bin_cmd!("maven-depgraph")
            .args([
                "-p",
                "A",
                "-r",
                DIAMOND_FIXTURE,
                "-t",
                "-o",
                "/nonexistent/dir/graph.dot",
            ])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Parent directory does not exist"));
    }
}

#[test]
fn test_e2e_tree_output_with_cycle() {
    cargo_bin_cmd!("maven-depgraph")
        .args(["-p", "A", "-r", CYCLE_FIXTURE, "-t", "-v", "1.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dependency graph for A:A:1.0.0"))
        .stdout(predicate::str::contains(
            "Cycle 1: A:A:1.0.0 -> B:B:1.0.0 -> C:C:1.0.0 -> A:A:1.0.0",
        ))
        .stdout(predicate::str::contains("Total unique nodes: 3"));
}

#[test]
fn test_e2e_dot_output() {
    let output = cargo_bin_cmd!("maven-depgraph")
        .args(["-p", "A", "-r", DIAMOND_FIXTURE, "-t", "-v", "1.0.0", "-f", "dot"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "digraph dependencies {\n\
         \x20   \"A:A:1.0.0\" -> \"B:B:1.0.0\";\n\
         \x20   \"A:A:1.0.0\" -> \"C:C:1.0.0\";\n\
         \x20   \"B:B:1.0.0\" -> \"D:D:1.0.0\";\n\
         \x20   \"C:C:1.0.0\" -> \"D:D:1.0.0\";\n\
         }\n"
    );
}

#[test]
fn test_e2e_json_output_is_valid() {
    let output = cargo_bin_cmd!("maven-depgraph")
        .args(["-p", "A", "-r", CYCLE_FIXTURE, "-t", "-f", "json", "--reverse", "C"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["root"], "A:A:unknown");
    assert_eq!(json["summary"]["nodes"], 4);
    // Reverse report goes to stderr so stdout stays valid JSON
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Reverse dependencies of C"));
}

#[test]
fn test_e2e_depth_limit() {
    cargo_bin_cmd!("maven-depgraph")
        .args(["-p", "A", "-r", DEEP_FIXTURE, "-t", "-v", "1.0.0", "-d", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C:C:1.0.0"))
        .stdout(predicate::str::contains("D:D:1.0.0").not())
        .stdout(predicate::str::contains("Total unique nodes: 3"));
}

#[test]
fn test_e2e_unresolved_package_is_a_warning() {
    cargo_bin_cmd!("maven-depgraph")
        .args(["-p", "A", "-r", DEEP_FIXTURE, "-t", "-v", "1.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MISSING:MISSING:1.0.0 (unresolved)"))
        .stderr(predicate::str::contains("Skipping malformed line 7"))
        .stderr(predicate::str::contains("Warning: Failed to resolve dependencies of MISSING"));
}

#[test]
fn test_e2e_reverse_lookup() {
    cargo_bin_cmd!("maven-depgraph")
        .args([
            "-p",
            "A",
            "-r",
            DIAMOND_FIXTURE,
            "-t",
            "-v",
            "1.0.0",
            "--reverse",
            "D",
            "--reverse-depth",
            "1",
            "--reverse",
            "ZZZ",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Reverse dependencies of D (2):\n  1. B:B:1.0.0\n  2. C:C:1.0.0",
        ))
        .stderr(predicate::str::contains("Reverse lookup for ZZZ failed"));
}

#[test]
fn test_e2e_root_reverse_lookup_none_found() {
    cargo_bin_cmd!("maven-depgraph")
        .args(["-p", "A", "-r", DIAMOND_FIXTURE, "-t", "-v", "1.0.0", "--reverse", "A@1.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Reverse dependencies of A@1.0.0: none found",
        ));
}

#[test]
fn test_e2e_writes_dot_file() {
    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("graph.dot");

    cargo_bin_cmd!("maven-depgraph")
        .args(["-p", "A", "-r", DIAMOND_FIXTURE, "-t", "-v", "1.0.0", "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Graph written to"));

    let written = fs::read_to_string(&output_path).unwrap();
    assert!(written.starts_with("digraph dependencies {"));
    assert_eq!(written.lines().filter(|l| l.contains("->")).count(), 4);
}

#[test]
fn test_e2e_config_file_supplies_repository() {
    let dir = TempDir::new().unwrap();
    let fixture = fs::canonicalize(CYCLE_FIXTURE).unwrap();
    let config_path = dir.path().join("depgraph.yml");
    fs::write(
        &config_path,
        format!(
            "repository: {}\ntest_mode: true\nformat: dot\nshow_licenses: true\n",
            fixture.display()
        ),
    )
    .unwrap();

    cargo_bin_cmd!("maven-depgraph")
        .args(["-p", "A", "-c"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("digraph dependencies {"))
        .stderr(predicate::str::contains(
            "Unknown config field 'show_licenses' will be ignored",
        ));
}

#[test]
fn test_e2e_config_auto_discovery_and_cli_override() {
    let dir = TempDir::new().unwrap();
    let fixture = fs::canonicalize(DIAMOND_FIXTURE).unwrap();
    fs::write(
        dir.path().join("maven-depgraph.config.yml"),
        format!("repository: {}\ntest_mode: true\nformat: json\n", fixture.display()),
    )
    .unwrap();

    cargo_bin_cmd!("maven-depgraph")
        .current_dir(dir.path())
        .args(["-p", "A", "-f", "tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dependency graph for A:A:unknown"));
}

#[test]
fn test_e2e_invalid_config_depth() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("depgraph.yml");
    fs::write(&config_path, "max_depth: 500\n").unwrap();

    cargo_bin_cmd!("maven-depgraph")
        .args(["-p", "A", "-r", DIAMOND_FIXTURE, "-t", "-c"])
        .arg(&config_path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("max_depth must be between 1 and 100"));
}
