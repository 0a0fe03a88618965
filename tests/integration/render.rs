//! Rendering to stdout, to files and from stdin.

use predicates::prelude::*;

use crate::common::{jpp, mov_templates};
use jpp_cli::test_utils::TemplateDir;

#[test]
fn test_flags_hex_and_test_id_from_stdin() {
    let dir = TemplateDir::new().unwrap();
    jpp(&dir)
        .write_stdin("{{ V | hex }},{{ test_id() }}")
        .assert()
        .success()
        .stdout("0x100,1");
}

#[test]
fn test_render_file_to_stdout() {
    let dir = mov_templates();
    jpp(&dir)
        .arg("mov.jS")
        .assert()
        .success()
        .stdout("mov #0x200, r4 ; test 1\nmov #0x200, r5 ; test 2\n");
}

#[test]
fn test_render_to_output_file() {
    let dir = mov_templates();
    jpp(&dir).args(["-o", "out/mov.S", "mov.jS"]).assert().success().stdout("");
    assert_eq!(
        dir.read("out/mov.S").unwrap(),
        "mov #0x200, r4 ; test 1\nmov #0x200, r5 ; test 2\n"
    );
}

#[test]
fn test_infile_in_subdirectory_resolves_includes_there() {
    let dir = TemplateDir::new().unwrap();
    dir.write("src/main.jS", "{% include 'part.inc' %}{{ base2 | ext0 }}\n").unwrap();
    dir.write("src/part.inc", "part ").unwrap();
    jpp(&dir).arg("src/main.jS").assert().success().stdout("part 120\n");
}

#[test]
fn test_stdin_dash_argument() {
    let dir = TemplateDir::new().unwrap();
    dir.write("a.inc", "{{ 0x80 | ext1 }}").unwrap();
    jpp(&dir)
        .arg("-")
        .write_stdin("{% include 'a.inc' %} {% for k, v in {'a': 1, 'b': 2} | selectkeys(['b']) | items %}{{ k }}={{ v }}{% endfor %}")
        .assert()
        .success()
        .stdout("-128 b=2");
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = TemplateDir::new().unwrap();
    jpp(&dir)
        .arg("--verbose")
        .write_stdin("x")
        .assert()
        .success()
        .stdout("x")
        .stderr(predicate::str::contains("rendering"));
}
