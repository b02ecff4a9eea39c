//! Build script for dirinfo-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs and
/// src/commands/list.rs.
fn build_cli() -> Command {
    Command::new("dirinfo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("List the files of a directory with their timestamps and attributes")
        .long_about(
            "Validates an absolute directory path, trims whitespace around its segments \
             and lists the files directly inside it with their creation, access and \
             modification times and their hidden and read-only flags. Long paths are \
             wrapped at separators to fit the terminal width.",
        )
        .arg(
            Arg::new("DIRECTORY")
                .help("Absolute directory path (d:\\kat on Windows, /kat/kat2 elsewhere)")
                .allow_hyphen_values(true),
        )
        .after_help(
            "ENVIRONMENT:\n  \
             DIRINFO_CONFIG         Configuration file to read\n  \
             DIRINFO_WIDTH          Fixed output width in columns\n  \
             DIRINFO_TIME_FORMAT    strftime format for timestamps\n  \
             DIRINFO_PRESERVE_CASE  Keep the case of the path argument\n  \
             DIRINFO_LOG_MODE       quiet, normal or verbose",
        )
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("dirinfo.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
