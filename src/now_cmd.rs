use anyhow::{Context, Result};
use kairos_instant::{Instant, Zone};

use crate::cli::NowArgs;

pub fn run(args: NowArgs) -> Result<()> {
    let zone = parse_zone(args.zone.as_deref())?;
    println!("{}", Instant::now(zone));
    Ok(())
}

/// Shared zone-argument handling for all subcommands.
pub fn parse_zone(zone: Option<&str>) -> Result<Option<Zone>> {
    zone.map(|name| Zone::parse(name).with_context(|| format!("bad --zone argument {name:?}")))
        .transpose()
}
