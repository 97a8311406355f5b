use clap::{Parser, Subcommand};
use responsive_layout::breakpoint::{FALLBACK_SCALE, RULES};
use responsive_layout::{LayoutConfig, resolve};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "layout_tool")]
#[command(about = "Inspect layout breakpoints and export the built-in layout config", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the layout scale for each viewport width
    Scale {
        /// Viewport widths in pixels
        #[arg(required = true)]
        widths: Vec<u32>,
    },
    /// Print the breakpoint rules in evaluation order
    Breakpoints,
    /// Write the built-in layout config as RON
    ExportConfig {
        /// Output file; prints to stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> color_eyre::Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Scale { widths } => {
            for width in widths {
                println!("{width} -> {}", resolve(width));
            }
        }
        Commands::Breakpoints => {
            for rule in &RULES {
                println!("{:>12}  {}", rule.to_string(), rule.scale);
            }
            println!("{:>12}  {FALLBACK_SCALE}", "otherwise");
        }
        Commands::ExportConfig { output } => {
            let config = LayoutConfig::builtin()?;
            let ron_string = config.to_ron_pretty()?;

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        fs::create_dir_all(parent)?;
                    }
                    fs::write(&path, &ron_string)?;
                    println!("Wrote layout config to {}", path.display());
                }
                None => println!("{ron_string}"),
            }
        }
    }

    Ok(())
}
