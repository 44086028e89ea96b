use anyhow::Result;
use clap::Parser;
use objtree::areas::refs::DEFAULT_BRANCH;
use objtree::areas::repository::Repository;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "objtree",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "List the objects reachable from a branch",
    long_about = "This command walks the loose object store of a repository, starting at the \
    commit a branch points to, and prints one line per reachable object with its kind, \
    SHA and size. The store is only ever read.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The path to the repository (defaults to the current directory)")]
    path: Option<String>,
    #[arg(short, long, default_value = DEFAULT_BRANCH, help = "The branch to start from")]
    branch: String,
    #[arg(long, help = "Re-hash every object and fail if it does not match its SHA")]
    verify: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let path = match cli.path {
        Some(path) => path,
        None => std::env::current_dir()?.to_string_lossy().into_owned(),
    };

    let repository = Repository::new(&path, Box::new(std::io::stdout()))?
        .with_checksum_verification(cli.verify);

    repository.walk_objects(&cli.branch)?;

    Ok(())
}
