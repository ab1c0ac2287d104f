use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;
use unellipsis::{CleanOptions, StructuralTags, clean_stream, sweep_lines};

#[derive(Parser)]
#[command(
    version,
    about = "Strip ellipsis runs from chat transcripts and Markdown"
)]
struct Cli {
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files")]
    in_place: bool,
    /// Treat each input line as a JSON chat message record
    #[arg(long = "chat")]
    chat: bool,
    /// Report the number of removed characters on stderr
    #[arg(long = "count")]
    count: bool,
    #[command(flatten)]
    opts: CleanFlags,
    /// Files to clean
    files: Vec<PathBuf>,
}

#[derive(clap::Args, Clone, Copy)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "CLI exposes six independent policy flags"
)]
struct CleanFlags {
    /// Treat runs of two periods as ellipses
    #[arg(long = "two-dots")]
    two_dots: bool,
    /// Remove every period run, digit-adjacent ones included
    #[arg(long = "all-dots")]
    all_dots: bool,
    /// Delete runs outright instead of keeping words apart with a space
    #[arg(long = "no-space")]
    no_space: bool,
    /// Clean inside fenced blocks and inline code spans too
    #[arg(long = "no-protect")]
    no_protect: bool,
    /// Protect HTML containers and tag syntax
    #[arg(long = "tags")]
    tags: bool,
    /// Structural container policy when --tags is set
    #[arg(long = "structural", value_enum, default_value_t = StructuralArg::Nested)]
    structural: StructuralArg,
    /// Collapse doubled spaces and excess blank lines afterwards
    #[arg(long = "tidy")]
    tidy: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum StructuralArg {
    /// Leave p/div/span containers cleanable
    Ignore,
    /// Mask them unless one wraps the whole message
    Nested,
    /// Mask every one of them
    Always,
}

impl CleanFlags {
    fn to_options(self) -> CleanOptions {
        CleanOptions {
            two_dots: self.two_dots,
            all_dots: self.all_dots,
            preserve_space: !self.no_space,
            protect_code: !self.no_protect,
            protect_tags: self.tags,
            structural_tags: match self.structural {
                StructuralArg::Ignore => StructuralTags::Ignore,
                StructuralArg::Nested => StructuralTags::NestedOnly,
                StructuralArg::Always => StructuralTags::Always,
            },
            tidy_whitespace: self.tidy,
        }
    }
}

fn process_lines(lines: &[String], chat: bool, opts: &CleanOptions) -> (Vec<String>, usize) {
    if chat {
        sweep_lines(lines, opts)
    } else {
        clean_stream(lines, opts)
    }
}

fn rewrite_path(path: &Path, chat: bool, opts: &CleanOptions) -> std::io::Result<usize> {
    if chat {
        unellipsis::rewrite_chat(path, opts)
    } else {
        unellipsis::rewrite(path, opts)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let opts = cli.opts.to_options();
    let mut total = 0usize;

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        let lines: Vec<String> = input.lines().map(str::to_string).collect();
        let (fixed, removed) = process_lines(&lines, cli.chat, &opts);
        total += removed;
        println!("{}", fixed.join("\n"));
    } else if cli.in_place {
        let results: Vec<std::io::Result<usize>> = cli
            .files
            .par_iter()
            .map(|path| rewrite_path(path, cli.chat, &opts))
            .collect();
        for (path, result) in cli.files.iter().zip(results) {
            total += result.with_context(|| format!("failed to rewrite {}", path.display()))?;
        }
    } else {
        let results: Vec<std::io::Result<(Vec<String>, usize)>> = cli
            .files
            .par_iter()
            .map(|path| {
                let content = fs::read_to_string(path)?;
                let lines: Vec<String> = content.lines().map(str::to_string).collect();
                Ok(process_lines(&lines, cli.chat, &opts))
            })
            .collect();
        for (path, result) in cli.files.iter().zip(results) {
            let (fixed, removed) =
                result.with_context(|| format!("failed to process {}", path.display()))?;
            total += removed;
            println!("{}", fixed.join("\n"));
        }
    }

    if cli.count {
        eprintln!("removed {total} characters");
    }

    Ok(())
}
