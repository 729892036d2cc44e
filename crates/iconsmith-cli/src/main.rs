//! iconsmith CLI - React icon components from an SVG icon set.

mod colors;
mod component;
mod declare;
mod generate;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use iconsmith_core::GeneratorConfig;

#[derive(Parser)]
#[command(name = "iconsmith")]
#[command(about = "Generate React icon components and type declarations from SVG icons")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a .jsx and a .d.ts file for every icon and variant (default)
    Generate(GenerateArgs),

    /// Print the component source generated for one SVG file
    Component {
        /// Path to the SVG file
        svg: PathBuf,
    },

    /// Emit the type declaration of a TypeScript source file
    Declare {
        /// Path to the source (.ts/.tsx) file
        source: PathBuf,

        /// Output path (default: <source stem>.d.ts next to the source)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Root of the installed icon package
    #[arg(long, default_value = "node_modules/@material-icons/svg")]
    package_root: PathBuf,

    /// tsconfig providing the compiler options
    #[arg(long, default_value = "tsconfig.json")]
    tsconfig: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "icons")]
    out_dir: PathBuf,

    /// Number of worker threads
    #[arg(short, long, default_value = "1")]
    jobs: usize,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        let defaults = GeneratorConfig::default();
        Self {
            package_root: defaults.package_root,
            tsconfig: defaults.tsconfig_path,
            out_dir: defaults.out_dir,
            jobs: defaults.jobs,
        }
    }
}

impl From<GenerateArgs> for GeneratorConfig {
    fn from(args: GenerateArgs) -> Self {
        Self {
            package_root: args.package_root,
            tsconfig_path: args.tsconfig,
            out_dir: args.out_dir,
            jobs: args.jobs,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::DEBUG.into())
    } else {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Attach recovery hints to iconsmith-core errors
    let format_error = |err: anyhow::Error| -> anyhow::Error {
        if let Some(core_err) = err.downcast_ref::<iconsmith_core::Error>() {
            anyhow::anyhow!("{}", core_err.with_hint())
        } else {
            err
        }
    };

    match cli.command.unwrap_or_else(|| Commands::Generate(GenerateArgs::default())) {
        Commands::Generate(args) => generate::execute(args.into()).map_err(format_error)?,

        Commands::Component { svg } => component::execute(&svg).map_err(format_error)?,

        Commands::Declare { source, out } => {
            declare::execute(&source, out.as_deref()).map_err(format_error)?;
        }
    }

    Ok(())
}
