use anyhow::{Context, Result};
use kairos_human::DiffFormatter;
use kairos_instant::Instant;

use crate::cli::DiffArgs;

pub fn run(args: DiffArgs) -> Result<()> {
    let a = Instant::parse(&args.a, None).with_context(|| format!("cannot parse {:?}", args.a))?;
    let b = Instant::parse(&args.b, None).with_context(|| format!("cannot parse {:?}", args.b))?;

    if args.human {
        let formatter = DiffFormatter::default();
        println!("{}", formatter.diff_for_humans(&a, Some(&b), args.absolute));
        return Ok(());
    }

    let diff = a.diff(&b);
    let sign = if args.absolute || !diff.inverted {
        ""
    } else {
        "-"
    };
    println!(
        "{sign}{}y {}m {}d {:02}:{:02}:{:02}.{:06} (total {} days)",
        diff.years,
        diff.months,
        diff.days,
        diff.hours,
        diff.minutes,
        diff.seconds,
        diff.microseconds,
        diff.total_days,
    );
    Ok(())
}
