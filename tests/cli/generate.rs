use crate::harness::TestContext;
use predicates::prelude::*;

fn with_custom_template(ctx: &TestContext, content: &str) {
    ctx.cli().args(["create", "--name", "Custom", "--content", content]).assert().success();
}

#[test]
fn replaces_placeholder_in_custom_template() {
    let ctx = TestContext::new();
    with_custom_template(&ctx, "Rewrite: {{content}}");

    assert_eq!(ctx.generate(&["hello"]), "Rewrite: hello\n");
}

#[test]
fn appends_when_template_lacks_placeholder() {
    let ctx = TestContext::new();
    with_custom_template(&ctx, "Be concise.");

    assert_eq!(ctx.generate(&["hello"]), "Be concise.\n\nhello\n");
}

#[test]
fn builtin_trigger_is_replaced() {
    let ctx = TestContext::new();

    let out = ctx.generate(&["--template", "blog-post", "Rust ownership"]);
    assert!(out.ends_with("naturally.\n\nRust ownership\n"));
    assert!(!out.contains("[Paste your specific topic or outline here]"));
}

#[test]
fn options_append_blocks_with_examples_last() {
    let ctx = TestContext::new();
    with_custom_template(&ctx, "{{content}}");

    let out = ctx.generate(&["--examples", "--char-limit", "500", "hello"]);
    assert!(out.starts_with("hello\n\n### Requirement: Length Constraint\n"));
    assert!(out.contains("approximately 500 characters"));
    assert!(out.trim_end().ends_with("help me choose the best one."));
}

#[test]
fn zero_char_limit_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli().args(["generate", "--char-limit", "0", "hello"]).assert().failure();
}

#[test]
fn reads_content_from_stdin() {
    let ctx = TestContext::new();
    with_custom_template(&ctx, "In: {{content}}");

    ctx.cli()
        .arg("generate")
        .write_stdin("piped text")
        .assert()
        .success()
        .stdout("In: piped text\n");
}

#[test]
fn reads_content_from_file() {
    let ctx = TestContext::new();
    with_custom_template(&ctx, "In: {{content}}");
    let input = ctx.work_dir().join("input.txt");
    std::fs::write(&input, "from file").unwrap();

    ctx.cli()
        .arg("generate")
        .arg("--file")
        .arg(&input)
        .assert()
        .success()
        .stdout("In: from file\n");
}

#[test]
fn blank_content_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Content is empty"));
    assert!(!ctx.store_file("recent_prompts").exists());
}

#[test]
fn unknown_template_is_reported() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--template", "missing", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template 'missing' not found"));
}

#[test]
fn stale_selection_is_reported() {
    let ctx = TestContext::new();
    ctx.write_store_file("session", r#"{"selectedTemplateId": "custom-1"}"#);

    ctx.cli()
        .args(["generate", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template 'custom-1' not found"));
}

#[test]
fn sample_can_be_reused_as_input() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("sample")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("direct-message"));

    let out = ctx.generate(&["--reuse"]);
    assert!(out.contains("def validate_highlighting():"));
    assert!(out.starts_with("DIRECT MESSAGE ENHANCEMENT REQUEST"));
}
