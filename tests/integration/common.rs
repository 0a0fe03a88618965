//! Shared helpers for the integration tests.

use assert_cmd::Command;
use jpp_cli::test_utils::TemplateDir;

/// `jpp` running inside `dir` with logging left at its default.
pub fn jpp(dir: &TemplateDir) -> Command {
    let mut cmd = Command::cargo_bin("jpp").unwrap();
    cmd.current_dir(dir.root()).env_remove("RUST_LOG");
    cmd
}

/// A directory with `mov.jS` importing `lib.inc`, and including `zero.inc`
/// only when `base1` is zero.
pub fn mov_templates() -> TemplateDir {
    let dir = TemplateDir::new().unwrap();
    dir.write(
        "mov.jS",
        "{% import 'lib.inc' as lib %}\n\
         {% for reg in ['r4', 'r5'] %}\n\
         {{ lib.mov(reg) }}\n\
         {% endfor %}\n\
         {% if base1 == 0 %}\n\
         {% include 'zero.inc' %}\n\
         {% endif %}\n",
    )
    .unwrap();
    dir.write(
        "lib.inc",
        "{% set base = 0x200 %}\n\
         {% macro mov(reg) %}mov #{{ base | hex }}, {{ reg }} ; test {{ test_id() }}{% endmacro %}\n",
    )
    .unwrap();
    dir.write("zero.inc", "clr r4\n").unwrap();
    dir
}
