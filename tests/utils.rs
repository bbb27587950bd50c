#![allow(dead_code)]

use blueprint::cli::{run, Cli, Commands};
use blueprint::error::Result;
use clap::Parser;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Runs `blueprint new <args> -y -o <parent>` in-process.
///
/// # Arguments
/// * `parent` - Directory the project is generated into.
/// * `args` - Arguments following `new`, usually starting with the project name.
pub fn generate(parent: &Path, args: &[&str]) -> Result<()> {
    let parent = parent.to_str().unwrap();
    let argv = ["blueprint", "new"]
        .into_iter()
        .chain(args.iter().copied())
        .chain(["-y", "-o", parent]);
    let Commands::New(args) = Cli::parse_from(argv).command;
    run(args)
}

/// Relative paths of every file below `root`, with `/` separators.
pub fn collect_files(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect()
}

pub fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative))
        .unwrap_or_else(|e| panic!("cannot read {relative}: {e}"))
}

/// Prints files only present in one of the two trees.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let files1 = collect_files(dir1);
    let files2 = collect_files(dir2);

    println!("\n=== Directory Comparison ===");
    for file in files1.difference(&files2) {
        println!("  + {file}");
    }
    for file in files2.difference(&files1) {
        println!("  - {file}");
    }
    for file in files1.intersection(&files2) {
        if fs::read(dir1.join(file)).unwrap() != fs::read(dir2.join(file)).unwrap() {
            println!("  ~ {file}");
        }
    }
    println!("=== End of Comparison ===\n");
}
