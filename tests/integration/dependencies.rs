//! Makefile dependency output.

use crate::common::{jpp, mov_templates};
use jpp_cli::test_utils::TemplateDir;

#[test]
fn test_m_prints_rule_only() {
    let dir = mov_templates();
    jpp(&dir).args(["-M", "mov.jS"]).assert().success().stdout("mov.S: lib.inc mov.jS\n");
}

#[test]
fn test_untaken_include_is_not_a_dependency() {
    let dir = TemplateDir::new().unwrap();
    dir.write("cond.jS", "{% if base1 == 0 %}{% include 'foo.inc' %}{% endif %}ok\n").unwrap();
    dir.write("taken.jS", "{% if base1 != 0 %}{% include 'foo.inc' %}{% endif %}ok\n").unwrap();
    dir.write("foo.inc", "foo ").unwrap();

    jpp(&dir).args(["-M", "cond.jS"]).assert().success().stdout("cond.S: cond.jS\n");
    jpp(&dir).args(["-M", "taken.jS"]).assert().success().stdout("taken.S: foo.inc taken.jS\n");
}

#[test]
fn test_m_with_same_outfile_and_depfile() {
    let dir = mov_templates();
    jpp(&dir)
        .args(["-M", "-o", "mov.d", "-MF", "mov.d", "mov.jS"])
        .assert()
        .success()
        .stdout("");
    assert_eq!(dir.read("mov.d").unwrap(), "mov.S: lib.inc mov.jS\n");
}

#[test]
fn test_md_without_output_writes_depfile_in_cwd() {
    let dir = mov_templates();
    dir.write("sub/x.jS", "{% include 'y.inc' %}").unwrap();
    dir.write("sub/y.inc", "y\n").unwrap();

    jpp(&dir).args(["-MD", "sub/x.jS"]).assert().success().stdout("y\n");
    assert_eq!(dir.read("x.d").unwrap(), "x.S: x.jS y.inc\n");
}

#[test]
fn test_md_with_output_and_target() {
    let dir = mov_templates();
    jpp(&dir)
        .args(["-MD", "-MT", "build/mov.o", "-o", "build/mov.S", "mov.jS"])
        .assert()
        .success()
        .stdout("");
    assert!(dir.read("build/mov.S").unwrap().starts_with("mov #0x200, r4"));
    assert_eq!(dir.read("build/mov.d").unwrap(), "build/mov.o: lib.inc mov.jS\n");
}

#[test]
fn test_glued_flag_values() {
    let dir = mov_templates();
    jpp(&dir)
        .args(["-M", "-MFdeps.mk", "-MTall", "-o", "mov.S", "mov.jS"])
        .assert()
        .success();
    assert_eq!(dir.read("deps.mk").unwrap(), "all: lib.inc mov.jS\n");
    assert!(dir.read("mov.S").unwrap().contains("test 2"));
}

#[test]
fn test_stdin_template_is_not_listed() {
    let dir = TemplateDir::new().unwrap();
    dir.write("a.inc", "a").unwrap();
    jpp(&dir)
        .args(["-M", "-MT", "t"])
        .write_stdin("{% include 'a.inc' %}")
        .assert()
        .success()
        .stdout("t: a.inc\n");
}
