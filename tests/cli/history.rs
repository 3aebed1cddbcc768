use crate::harness::TestContext;
use predicates::prelude::*;

fn history_lines(ctx: &TestContext) -> Vec<String> {
    let output = ctx.cli().arg("history").assert().success().get_output().clone();
    String::from_utf8(output.stdout).unwrap().lines().map(str::to_string).collect()
}

#[test]
fn empty_history_is_reported() {
    let ctx = TestContext::new();

    ctx.cli().arg("history").assert().success().stdout("No recent prompts\n");
}

#[test]
fn consecutive_duplicates_are_recorded_once() {
    let ctx = TestContext::new();

    ctx.generate(&["same input"]);
    ctx.generate(&["same input"]);

    assert_eq!(history_lines(&ctx).len(), 1);
}

#[test]
fn keeps_five_most_recent_newest_first() {
    let ctx = TestContext::new();

    for i in 1..=6 {
        ctx.generate(&[&format!("input {}", i)]);
    }

    let lines = history_lines(&ctx);
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("1. ") && lines[0].ends_with("input 6"));
    assert!(lines[4].starts_with("5. ") && lines[4].ends_with("input 2"));
    assert!(!lines.iter().any(|l| l.ends_with("input 1")));
}

#[test]
fn restore_brings_back_output_and_selection() {
    let ctx = TestContext::new();
    ctx.generate(&["--template", "blog-post", "first topic"]);
    ctx.generate(&["--template", "direct-message", "second message"]);

    ctx.cli()
        .args(["history", "restore", "2"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Blog Post Generator"));

    assert_eq!(ctx.selected_template(), "blog-post");
    ctx.cli().arg("show").assert().success().stdout(predicate::str::contains("first topic"));
}

#[test]
fn restore_with_deleted_template_restores_content_only() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["create", "--name", "Temporary", "--content", "T: {{content}}"])
        .assert()
        .success();
    let id = ctx.selected_template();
    ctx.generate(&["text"]);
    ctx.cli().args(["delete", &id]).assert().success();
    ctx.cli().args(["select", "blog-post"]).assert().success();

    ctx.cli()
        .args(["history", "restore", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Original template missing"));

    assert_eq!(ctx.selected_template(), "blog-post");
    ctx.cli().arg("show").assert().success().stdout("T: text\n");
}

#[test]
fn restore_out_of_range_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["history", "restore", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("History entry 3 not found"));
}

#[test]
fn clear_removes_entries() {
    let ctx = TestContext::new();
    ctx.generate(&["one"]);
    ctx.generate(&["two"]);

    ctx.cli()
        .args(["history", "clear"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Cleared 2"));
    ctx.cli().arg("history").assert().success().stdout("No recent prompts\n");
}

#[test]
fn malformed_history_is_treated_as_empty() {
    let ctx = TestContext::new();
    ctx.write_store_file("recent_prompts", "[1, 2");

    ctx.cli().arg("history").assert().success().stdout("No recent prompts\n");
    ctx.generate(&["fresh"]);
    assert_eq!(history_lines(&ctx).len(), 1);
}
