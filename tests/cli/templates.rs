use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn lists_builtins_with_first_selected() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("* master-system - Master System Instruction"))
        .stdout(predicate::str::contains("direct-message"))
        .stdout(predicate::str::contains("blog-post"))
        .stdout(predicate::str::contains("cli-support"));
}

#[test]
fn create_selects_and_persists_custom_template() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["create", "--name", "Rewriter", "--content", "Rewrite: {{content}}"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Template saved"));

    let ids = ctx.custom_template_ids();
    assert_eq!(ids.len(), 1);
    assert!(ids[0].starts_with("custom-"));
    assert_eq!(ctx.selected_template(), ids[0]);
    assert!(ctx.store_file("custom_templates").exists());
}

#[test]
fn create_reads_body_from_file() {
    let ctx = TestContext::new();
    let body = ctx.work_dir().join("body.txt");
    std::fs::write(&body, "Summarize: {{content}}").unwrap();

    ctx.cli()
        .args(["create", "-n", "Summarizer", "-f"])
        .arg(&body)
        .assert()
        .success();

    assert_eq!(ctx.generate(&["some text"]), "Summarize: some text\n");
}

#[test]
fn create_rejects_short_name() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["create", "--name", "ab", "--content", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name must be between 3 and 30 characters"));
}

#[test]
fn create_rejects_long_description() {
    let ctx = TestContext::new();
    let description = "d".repeat(101);

    ctx.cli()
        .args(["create", "--name", "Valid", "--description", &description, "--content", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Description"));
}

#[test]
fn create_requires_a_body() {
    let ctx = TestContext::new();

    ctx.cli().args(["create", "--name", "Valid"]).assert().failure();
}

#[test]
fn create_caps_custom_templates_at_ten() {
    let ctx = TestContext::new();

    for i in 0..10 {
        ctx.cli()
            .args(["create", "--name", &format!("Template {}", i), "--content", "{{content}}"])
            .assert()
            .success();
    }

    ctx.cli()
        .args(["create", "--name", "Eleventh", "--content", "{{content}}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Max 10 custom templates allowed."));
    assert_eq!(ctx.custom_template_ids().len(), 10);
}

#[test]
fn deleting_selected_template_resets_to_first_builtin() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["create", "--name", "Rewriter", "--content", "Rewrite: {{content}}"])
        .assert()
        .success();
    let id = ctx.selected_template();

    ctx.cli()
        .args(["delete", &id])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Selection reset to master-system"));

    assert_eq!(ctx.selected_template(), "master-system");
    assert!(ctx.custom_template_ids().is_empty());
}

#[test]
fn deleting_builtin_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["delete", "blog-post"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("built-in"));
}

#[test]
fn select_changes_selection() {
    let ctx = TestContext::new();

    ctx.cli().args(["select", "blog-post"]).assert().success();
    assert_eq!(ctx.selected_template(), "blog-post");

    ctx.cli()
        .args(["select", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template 'nope' not found"));
    assert_eq!(ctx.selected_template(), "blog-post");
}

#[test]
fn select_reads_id_from_piped_stdin() {
    let ctx = TestContext::new();

    ctx.cli().arg("select").write_stdin("cli-support\n").assert().success();
    assert_eq!(ctx.selected_template(), "cli-support");
}

#[test]
fn malformed_custom_templates_fall_back_to_builtins() {
    let ctx = TestContext::new();
    ctx.write_store_file("custom_templates", "{ definitely not json");

    ctx.cli()
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("master-system"))
        .stdout(predicate::str::contains("[custom]").not());
}
