use clap::{Parser, Subcommand};
use code_quality_check::{CommandTable, Config, QualityChecker, Reporter, ToolKind};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "code-quality-check")]
#[command(about = "Run Python formatting, lint, style, dead-code and complexity checks on a path")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the analysis tools against a path
    Check {
        /// File or directory to analyze
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Python interpreter used to launch the tools
        #[arg(short, long)]
        interpreter: Option<PathBuf>,

        /// Only run these tools (repeatable); defaults to all of them
        #[arg(short, long = "tool", value_enum)]
        tools: Vec<ToolKind>,

        /// Log diagnostics to stderr
        #[arg(short, long)]
        verbose: bool,
    },
    /// Print the commands a check would run, without running them
    Tools {
        /// File or directory to analyze
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Python interpreter used to launch the tools
        #[arg(short, long)]
        interpreter: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            path,
            interpreter,
            tools,
            verbose,
        } => {
            init_logging(verbose);
            let config = build_config(path, interpreter).with_tools(&tools);
            run_check(config).await?;
        }
        Commands::Tools { path, interpreter } => {
            init_logging(false);
            let config = build_config(path, interpreter);
            let mut reporter = Reporter::stdout();
            reporter.command_table(&CommandTable::build(&config))?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "code_quality_check=debug"
    } else {
        "code_quality_check=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(path: PathBuf, interpreter: Option<PathBuf>) -> Config {
    let config = Config::new(path);
    match interpreter {
        Some(interpreter) => config.with_interpreter(interpreter),
        None => config,
    }
}

async fn run_check(config: Config) -> anyhow::Result<()> {
    let checker = QualityChecker::new(config);
    let mut reporter = Reporter::stdout();
    // tool failures are part of the report, never the process exit status
    checker.run(&mut reporter).await?;
    Ok(())
}
