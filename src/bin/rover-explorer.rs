use clap::Parser;
use mars_rover::Explorer;
use mars_rover::logger;
use std::io;

#[derive(Parser, Debug)]
#[command(name = "rover-explorer")]
#[command(about = "Explore the Mars plateau with one rover at a time")]
struct Args {
    /// Upper right corner of the plateau, e.g. "5 5". Prompted for when omitted.
    #[arg(short, long)]
    plateau: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    logger::init_explorer_logger(args.verbose);
    tracing::debug!("CLI args: {:?}", args);

    let mut explorer = Explorer::new(io::stdin().lock(), io::stdout().lock());
    explorer.run(args.plateau)?;
    Ok(())
}
