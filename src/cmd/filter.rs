use anyhow::{anyhow, Result};
use clap::{ArgMatches, value_t};
use crate::args::opt;
use crate::column::Registry;

pub fn filter(registry: &Registry, args: &ArgMatches) -> Result<()> {
    let id    = value_t!(args, "column", String)?;
    let input = value_t!(args, "input",  String)?;
    let max   = opt(args.value_of("max"))?.unwrap_or(10);

    let column = registry.get(&id).ok_or_else(|| anyhow!("unknown column '{}'", id))?;

    match column.accept(&input, max) {
        Ok(value) => match value.display {
            Some(display) => println!("{}\t{}", value.v, display),
            None          => println!("{}", value.v),
        },
        Err(e) => {
            println!("invalid: {}", e);
            for option in column.complete(&input, max) {
                println!("  {}\t{}", option.value, option.display);
            }
        }
    }

    Ok(())
}
