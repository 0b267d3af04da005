use anyhow::{Context, Result};
use kairos_instant::Instant;

use crate::cli::AddArgs;
use crate::now_cmd::parse_zone;

pub fn run(args: AddArgs) -> Result<()> {
    let zone = parse_zone(args.zone.as_deref())?;
    let base = Instant::parse(&args.input, zone)
        .with_context(|| format!("cannot parse {:?}", args.input))?;
    let shifted = base
        .modify(&args.modifier)
        .with_context(|| format!("cannot apply modifier {:?}", args.modifier))?;
    tracing::info!(%base, %shifted, modifier = args.modifier, "applied modifier");
    println!("{shifted}");
    Ok(())
}
