mod common;
use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_init_writes_config_file() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    assert!(
        fixture.config_path().exists(),
        "init should create {}",
        fixture.config_path().display()
    );
}

#[test]
fn test_init_without_credentials_gives_guidance() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("No credentials detected"))
        .stdout(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let fixture = TestFixture::new();

    fixture.command().arg("init").assert().success();
    fixture
        .command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_init_detects_environment_credentials() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .env("GROQ_API_KEY", "gsk-test")
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("default provider is 'groq'"));

    let content = std::fs::read_to_string(fixture.config_path()).unwrap();
    assert!(content.contains("default_provider = \"groq\""));
}

#[test]
fn test_provider_set_then_list() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args([
            "provider",
            "set",
            "groq",
            "--api-key",
            "gsk-test",
            "--model",
            "llama-3.1-8b-instant",
            "--default",
        ])
        .assert()
        .success();

    fixture
        .command()
        .args(["provider", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("groq (default)"))
        .stdout(predicate::str::contains("key: config"))
        .stdout(predicate::str::contains("model: llama-3.1-8b-instant"));
}

#[test]
fn test_provider_list_reports_missing_keys() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["provider", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gemini"))
        .stdout(predicate::str::contains("key: missing"));
}

#[test]
fn test_provider_detect_reports_environment() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .env("GEMINI_API_KEY", "test-key")
        .args(["provider", "detect"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gemini: found GEMINI_API_KEY"))
        .stdout(predicate::str::contains("groq: GROQ_API_KEY not set"));

    assert!(fixture.config_path().exists());
}
