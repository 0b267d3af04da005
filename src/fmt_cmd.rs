use anyhow::{Context, Result};
use kairos_instant::{formats, Instant};

use crate::cli::FmtArgs;

pub fn run(args: FmtArgs) -> Result<()> {
    let instant = Instant::parse(&args.input, None)
        .with_context(|| format!("cannot parse {:?}", args.input))?;
    // A known template name wins; anything else is a raw strftime
    // pattern.
    let pattern = formats::by_name(&args.template).unwrap_or(args.template.as_str());
    let rendered = instant
        .format(pattern)
        .with_context(|| format!("cannot render template {:?}", args.template))?;
    println!("{rendered}");
    Ok(())
}
