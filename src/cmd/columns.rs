use anyhow::Result;
use clap::ArgMatches;
use crate::column::Registry;

pub fn columns(registry: &Registry, args: &ArgMatches) -> Result<()> {
    let filterable = args.is_present("filterable");

    for c in registry.columns() {
        let filter = match c.filter {
            Some(kind)            => kind.to_string(),
            None if filterable    => continue,
            None                  => "-".to_owned(),
        };

        let group = c.group.as_deref().unwrap_or("-");
        println!("{}\t{}\t{}\t{}\t{}", c.id, c.name, group, c.kind, filter);
    }

    Ok(())
}
