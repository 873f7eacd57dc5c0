// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cmd::commands::{
    cat_command, copy_command, list_command, meta_command, mv_command, rm_command, stat_command,
    write_command,
};
use cmd::common::{Progress, StorageContext, format_file_size};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "lfs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Storage root (overrides --config and LOCALFS_WORKDIR)
    #[arg(short = 'w', long, global = true)]
    work_dir: Option<PathBuf>,

    /// YAML file with a `work_dir` key
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one object's type, size, modification time and content type
    Stat {
        /// Logical path, or "-" for standard input
        path: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the entries of a directory
    Ls {
        /// Logical directory path
        #[arg(default_value = "")]
        dir: String,
        /// Report symlink targets instead of skipping links
        #[arg(short = 'L', long)]
        follow_links: bool,
        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },
    /// Copy an object to stdout
    Cat {
        /// Logical path, or "-" for standard input
        path: String,
        /// Start reading at this byte
        #[arg(long)]
        offset: Option<u64>,
        /// Read at most this many bytes
        #[arg(long)]
        size: Option<u64>,
        /// Report the byte total on stderr when done
        #[arg(short, long)]
        progress: bool,
    },
    /// Store standard input at a path
    Write {
        /// Logical path, or "-" for standard output
        path: String,
        /// Store exactly this many bytes; fewer on stdin is an error
        #[arg(long)]
        size: Option<u64>,
        /// Report the byte total on stderr when done
        #[arg(short, long)]
        progress: bool,
    },
    /// Copy one file to another path
    Cp { source: String, dest: String },
    /// Rename a file or directory
    Mv { source: String, dest: String },
    /// Remove files or empty directories
    Rm {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Show storage metadata
    Meta {
        #[arg(long)]
        json: bool,
    },
}

fn print_line(line: String) {
    println!("{}", line);
}

fn main() -> Result<()> {
    diagnostics::init_diagnostics();

    let cli = Cli::parse();
    let ctx = StorageContext::new(cli.work_dir.clone(), cli.config.clone());
    let storage = ctx.open_storage()?;

    match &cli.command {
        Commands::Stat { path, json } => stat_command(&storage, path, *json, print_line),
        Commands::Ls {
            dir,
            follow_links,
            json,
        } => list_command(&storage, dir, *follow_links, *json, print_line),
        Commands::Cat {
            path,
            offset,
            size,
            progress,
        } => {
            let progress = progress.then(Progress::new);
            let stdout = io::stdout();
            let mut out = stdout.lock();
            cat_command(&storage, path, *offset, *size, progress.as_ref(), &mut out)?;
            out.flush()?;
            if let Some(progress) = progress {
                eprintln!("read {} from {}", format_file_size(progress.total()), path);
            }
            Ok(())
        }
        Commands::Write {
            path,
            size,
            progress,
        } => {
            let progress = progress.then(Progress::new);
            let stdin = io::stdin();
            let mut input = stdin.lock();
            write_command(&storage, path, *size, progress.as_ref(), &mut input)?;
            if let Some(progress) = progress {
                eprintln!("wrote {} to {}", format_file_size(progress.total()), path);
            }
            Ok(())
        }
        Commands::Cp { source, dest } => copy_command(&storage, source, dest),
        Commands::Mv { source, dest } => mv_command(&storage, source, dest),
        Commands::Rm { paths } => rm_command(&storage, paths),
        Commands::Meta { json } => meta_command(&storage, *json, print_line),
    }
}
