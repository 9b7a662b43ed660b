use anyhow::Result;
use clap::Parser;
use progblur::logging::{init_logging, LoggingConfig};
use progblur::compose;

mod args;
mod output;
mod settings;

use args::Args;
use settings::FileSettings;

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.log.clone().map(LoggingConfig::with_filter).unwrap_or_default());

    let file = args.config.as_deref().map(FileSettings::load).transpose()?;
    let config = settings::resolve(&args, file)?;
    let stack = compose(&config);

    print!("{}", output::render(&stack, args.format, &args.class)?);
    Ok(())
}
