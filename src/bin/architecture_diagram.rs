use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use root_access_broker::diagram;
use root_access_broker::utils::logger;

#[derive(Debug, Parser)]
#[command(name = "architecture_diagram")]
#[command(about = "Render the root-access broker architecture as Graphviz DOT")]
struct Args {
    /// Where to write the DOT document.
    #[arg(long, default_value = "aws_root_access_network_architecture.dot")]
    output: PathBuf,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let dot = diagram::architecture().render();
    fs::write(&args.output, dot)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    tracing::info!(output = %args.output.display(), "Architecture diagram written");
    println!(
        "Diagram written to {} (render with: dot -Tpng {})",
        args.output.display(),
        args.output.display()
    );
    Ok(())
}
