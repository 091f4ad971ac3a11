//! Integration tests for codemap


use assert_cmd::Command;
use harness::{OUTPUT_FILE, TestTree, child, child_names, payload, run_codemap};
use predicates::prelude::*;

#[test]
fn test_basic_scan_scenario() {
    let tree = TestTree::new();
    tree.add_sized("a.txt", 10);
    tree.add_sized("b/c.py", 2000);
    tree.add_sized(".secret", 5);

    let run = run_codemap(tree.path());
    assert!(run.success, "codemap should succeed: {}", run.stderr);

    let data = run.data();
    assert_eq!(data["type"], "dir");
    assert_eq!(child_names(&data), vec!["b", "a.txt"]);
    assert_eq!(child(&data, "a.txt")["size"], 10);
    assert_eq!(child(&data, "a.txt")["ext"], "txt");
    assert_eq!(child(child(&data, "b"), "c.py")["size"], 2000);

    let stats = run.stats();
    assert_eq!(stats["files"], 2);
    assert_eq!(stats["totalBytes"], 2010);
    let exts: Vec<&str> = stats["extensions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["ext"].as_str().unwrap())
        .collect();
    assert_eq!(exts, vec!["py", "txt"]);

    assert!(!run.html().contains(".secret"), "hidden file must be excluded");
}

#[test]
fn test_progress_output() {
    let tree = TestTree::new();
    tree.add_sized("main.rs", 3);

    let run = run_codemap(tree.path());
    assert!(run.success);
    assert!(run.stdout.contains("Scanning "), "stdout: {}", run.stdout);
    assert!(
        run.stdout.contains("Map generated at: "),
        "stdout: {}",
        run.stdout
    );
    assert!(run.stdout.contains(OUTPUT_FILE));
}

#[test]
fn test_default_path_is_current_dir() {
    let tree = TestTree::new();
    tree.add_sized("src/lib.rs", 7);

    Command::cargo_bin("codemap")
        .unwrap()
        .current_dir(tree.path())
        .env("PATH", "")
        .assert()
        .success()
        .stdout(predicate::str::contains("Map generated at:"));

    let html = std::fs::read_to_string(tree.path().join(OUTPUT_FILE)).unwrap();
    let data = payload(&html, "DATA");
    assert_eq!(child_names(&data), vec!["src"]);
}

#[test]
fn test_relative_path_argument() {
    let tree = TestTree::new();
    tree.add_sized("project/readme.md", 4);
    tree.add_dir("out");

    Command::cargo_bin("codemap")
        .unwrap()
        .current_dir(tree.path().join("out"))
        .arg("../project")
        .env("PATH", "")
        .assert()
        .success();

    let html = std::fs::read_to_string(tree.path().join("out").join(OUTPUT_FILE)).unwrap();
    let data = payload(&html, "DATA");
    assert_eq!(data["name"], "project");
    assert_eq!(child_names(&data), vec!["readme.md"]);

    let meta = payload(&html, "META");
    let root = meta["root"].as_str().unwrap();
    assert!(!root.contains(".."), "root should be absolute: {}", root);
}

#[test]
fn test_overwrites_existing_report() {
    let tree = TestTree::new();
    tree.add_sized("x.rs", 1);
    tree.add_file(OUTPUT_FILE, b"stale");

    Command::cargo_bin("codemap")
        .unwrap()
        .current_dir(tree.path())
        .env("PATH", "")
        .assert()
        .success();

    let html = std::fs::read_to_string(tree.path().join(OUTPUT_FILE)).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
}

#[test]
fn test_unwritable_output_fails() {
    let tree = TestTree::new();
    tree.add_sized("x.rs", 1);
    // a directory in the way of the output file makes the write fail
    tree.add_dir(OUTPUT_FILE);

    Command::cargo_bin("codemap")
        .unwrap()
        .current_dir(tree.path())
        .env("PATH", "")
        .assert()
        .failure()
        .stderr(predicate::str::contains("codemap: cannot write"));
}

#[test]
fn test_nested_directories() {
    let tree = TestTree::new();
    tree.add_sized("src/main.rs", 1);
    tree.add_sized("src/tree/mod.rs", 1);
    tree.add_sized("src/tree/walker.rs", 1);
    tree.add_sized("Cargo.toml", 1);

    let run = run_codemap(tree.path());
    assert!(run.success);

    let data = run.data();
    assert_eq!(child_names(&data), vec!["src", "Cargo.toml"]);
    let src = child(&data, "src");
    assert_eq!(child_names(src), vec!["tree", "main.rs"]);
    assert_eq!(child_names(child(src, "tree")), vec!["mod.rs", "walker.rs"]);
    assert_eq!(run.stats()["directories"], 2);
}

#[test]
fn test_hidden_and_pycache_excluded() {
    let tree = TestTree::new();
    tree.add_sized("app.py", 1);
    tree.add_sized("__pycache__/app.cpython-312.pyc", 1);
    tree.add_sized(".git/HEAD", 1);

    let run = run_codemap(tree.path());
    assert!(run.success);
    assert_eq!(child_names(&run.data()), vec!["app.py"]);
    assert_eq!(run.stats()["files"], 1);
}

#[test]
fn test_artifact_like_names_are_mapped() {
    let tree = TestTree::new();
    tree.add_sized("app.py", 1);
    tree.add_sized("target", 7);
    tree.add_sized("node_modules", 2);
    tree.add_sized("deploy/target/config.yaml", 4);

    let run = run_codemap(tree.path());
    assert!(run.success);

    let data = run.data();
    assert_eq!(
        child_names(&data),
        vec!["deploy", "app.py", "node_modules", "target"]
    );
    assert_eq!(child(&data, "target")["size"], 7);
    let deploy_target = child(child(&data, "deploy"), "target");
    assert_eq!(child_names(deploy_target), vec!["config.yaml"]);

    let stats = run.stats();
    assert_eq!(stats["files"], 4);
    assert_eq!(stats["totalBytes"], 14);
}

#[test]
fn test_top_five_extensions() {
    let tree = TestTree::new();
    for (ext, n) in [("rs", 6), ("md", 1), ("py", 5), ("js", 4), ("toml", 3), ("txt", 2)] {
        for i in 0..n {
            tree.add_sized(&format!("f{}_{}.{}", ext, i, ext), 1);
        }
    }

    let run = run_codemap(tree.path());
    assert!(run.success);

    let stats = run.stats();
    let bars = stats["extensions"].as_array().unwrap();
    let exts: Vec<&str> = bars.iter().map(|e| e["ext"].as_str().unwrap()).collect();
    assert_eq!(exts, vec!["rs", "py", "js", "toml", "txt"]);
    assert_eq!(bars[0]["width"], 100.0);
    assert_eq!(bars[3]["width"], 50.0);
    assert_eq!(stats["files"], 21);
}

#[test]
fn test_help_flag() {
    Command::cargo_bin("codemap")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory to map"));
}
