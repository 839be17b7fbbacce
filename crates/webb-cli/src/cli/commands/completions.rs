//! `webb completions` – shell completion script.

use clap::Command;
use clap_complete::{generate, Shell};

pub fn run_completions(shell: Shell, cmd: &mut Command) -> String {
    let mut buf = Vec::new();
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
