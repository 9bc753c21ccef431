use clap::{Parser, Subcommand};
use log::info;
use miette::{IntoDiagnostic, Result};
use std::io::Write;

#[derive(Parser)]
#[command(name = "enclose")]
#[command(author, version, about = "Closure-pattern demonstrations")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run demonstrations and print their transcript
    Run {
        /// Demonstration names to run (all, in order, when omitted)
        names: Vec<String>,
    },

    /// List the available demonstration names
    List,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .build(),
        )
    }))?;

    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        None => {
            info!("running all demonstrations");
            enclose_core::run_all(&mut out)?;
        }

        Some(Commands::Run { names }) => {
            if names.is_empty() {
                info!("running all demonstrations");
                enclose_core::run_all(&mut out)?;
            } else {
                info!("running {} demonstration(s)", names.len());
                enclose_core::run_named(&names, &mut out)?;
            }
        }

        Some(Commands::List) => {
            for demo in enclose_core::all() {
                writeln!(out, "{}", demo.name()).into_diagnostic()?;
            }
        }
    }

    Ok(())
}
