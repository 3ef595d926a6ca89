use anyhow::Result;
use clap::{Parser, Subcommand};
use rift::areas::repository::Repository;
use std::path::Path;

#[derive(Parser)]
#[command(
    name = "rift",
    version = "0.1.0",
    about = "A minimal version-control backend",
    long_about = "Rift snapshots a working directory into immutable, \
    hash-identified objects. It is not meant to be a full replacement for git, \
    but rather a minimal content-addressable backend with a staging index.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Add files to the staging area",
        long_about = "This command stages files for the next commit. \
        Passing '.' stages every file in the working tree that is not excluded by the ignore rules."
    )]
    Add {
        #[arg(index = 1, required = true, help = "The files to stage, or '.' for all files")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command snapshots the staging index into a commit object with the specified commit message."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "status",
        about = "Show the staged changes",
        long_about = "This command reports the entries currently staged for the next commit."
    )]
    Status,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let mut repository = match path {
                Some(path) => Repository::new(path, Box::new(std::io::stdout()))?,
                None => {
                    let pwd = std::env::current_dir()?;
                    Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?
                }
            };

            repository.init()?
        }
        Commands::Add { paths } => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            for path in paths {
                if path == "." {
                    repository.add_all_files()?;
                    println!("All files added to staging area");
                } else {
                    repository.add_file(Path::new(path))?;
                    println!("File {path} added to staging area");
                }
            }
        }
        Commands::Commit { message } => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.commit(message.as_str())?;
        }
        Commands::Status => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.status()?
        }
    }

    Ok(())
}
