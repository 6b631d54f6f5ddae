mod compile_cmd;
mod config;
mod generate_cmd;
mod plan_cmd;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "deckforge", about = "Three-stage slide deck generator")]
struct Cli {
    /// Generator command line (overrides DECKFORGE_GENERATOR env var)
    #[arg(long, global = true)]
    generator: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a deckforge config file
    Init {
        /// Generator command line, e.g. "llm -m gpt-4o"
        #[arg(long, default_value = "llm")]
        command: String,
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Generate a deck from a free-form request
    Generate {
        /// The request text (omit to read --input or stdin)
        request: Option<String>,
        /// Read the request from a file instead
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output HTML file (defaults to deck.html)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Compile a stage-2 content JSON file to HTML without a generator
    Compile {
        /// Path to the content JSON file
        file: PathBuf,
        /// Output HTML file (defaults to deck.html)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Parse and validate a stage-1 plan JSON file
    CheckPlan {
        /// Path to the plan JSON file
        file: PathBuf,
    },
}

/// Execute the `deckforge init` command: write config file.
fn cmd_init(command: &str, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let generator = config::GeneratorSection::from_command_line(command)?;
    let cfg = config::ConfigFile {
        generator: generator.clone(),
    };
    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  generator.command = {}", generator.command);
    if !generator.args.is_empty() {
        println!("  generator.args = {:?}", generator.args);
    }
    println!();
    println!("Next: run `deckforge generate \"your topic\"` to build a deck.");

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { command, force } => cmd_init(&command, force),
        Commands::Generate {
            request,
            input,
            output,
        } => {
            generate_cmd::run_generate(
                cli.generator.as_deref(),
                request.as_deref(),
                input.as_deref(),
                output.as_deref(),
            )
            .await
        }
        Commands::Compile { file, output } => compile_cmd::run_compile(&file, output.as_deref()),
        Commands::CheckPlan { file } => plan_cmd::run_check_plan(&file),
    };

    if let Err(e) = result {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
    Ok(())
}
