use anyhow::{Context, Result};
use kairos_instant::Instant;

use crate::cli::ParseArgs;
use crate::now_cmd::parse_zone;

pub fn run(args: ParseArgs) -> Result<()> {
    let zone = parse_zone(args.zone.as_deref())?;
    let instant = match args.format {
        Some(format) => Instant::create_from_format(&args.input, &format, zone)
            .with_context(|| format!("cannot parse {:?} with format {format:?}", args.input))?,
        None => Instant::parse(&args.input, zone)
            .with_context(|| format!("cannot parse {:?}", args.input))?,
    };
    println!("{instant}");
    Ok(())
}
