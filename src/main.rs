//! Skintotem - command-line tool for turning player skins into totem textures

use std::process::ExitCode;

use skintotem::cli;

fn main() -> ExitCode {
    cli::run()
}
