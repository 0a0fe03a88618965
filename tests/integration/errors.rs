//! Failures: non-zero exit, a readable message, no outputs written.

use predicates::prelude::*;

use crate::common::jpp;
use jpp_cli::test_utils::TemplateDir;

#[test]
fn test_undefined_name_fails_without_output_file() {
    let dir = TemplateDir::new().unwrap();
    dir.write("bad.jS", "ok\n{{ bse1 }}\n").unwrap();

    jpp(&dir)
        .args(["-MD", "-o", "bad.S", "bad.jS"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("UndefinedName"))
        .stderr(predicate::str::contains("bad.jS, line 2"));
    assert!(!dir.path("bad.S").exists());
    assert!(!dir.path("bad.d").exists());
}

#[test]
fn test_failed_render_keeps_previous_output() {
    let dir = TemplateDir::new().unwrap();
    dir.write("bad.jS", "{{ [1] | selectkeys(['a']) }}").unwrap();
    dir.write("bad.S", "previous\n").unwrap();

    jpp(&dir)
        .args(["-o", "bad.S", "bad.jS"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("selectkeys expects a mapping"));
    assert_eq!(dir.read("bad.S").unwrap(), "previous\n");
}

#[test]
fn test_missing_include() {
    let dir = TemplateDir::new().unwrap();
    dir.write("main.jS", "{% include 'nope.inc' %}").unwrap();
    jpp(&dir)
        .args(["-M", "main.jS"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("NotFound"))
        .stderr(predicate::str::contains("nope.inc"));
}

#[test]
fn test_missing_infile() {
    let dir = TemplateDir::new().unwrap();
    jpp(&dir)
        .arg("absent.jS")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NotFound"));
}

#[test]
fn test_syntax_error() {
    let dir = TemplateDir::new().unwrap();
    jpp(&dir)
        .write_stdin("{% if %}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ParseError"));
}

#[test]
fn test_verbose_conflicts_with_quiet() {
    let dir = TemplateDir::new().unwrap();
    jpp(&dir).args(["-v", "-q"]).assert().failure().code(2);
}
