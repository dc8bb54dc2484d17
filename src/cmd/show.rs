use anyhow::{anyhow, Result};
use clap::{ArgMatches, value_t};
use log::{debug, info};
use crate::args::{list, read};
use crate::column::{sort, Column, Registry};
use crate::combine::{combine, dns_latency};
use crate::flow::Ingest;
use crate::query::{decode, Params, Query};

pub fn show(registry: &Registry, args: &ArgMatches) -> Result<()> {
    let path    = value_t!(args, "records", String)?;
    let desc    = args.is_present("desc");
    let ids     = list(args.value_of("columns"));
    let order   = args.value_of("sort");

    let query = match args.value_of("query") {
        Some(qs) => decode(&Params::parse(qs), registry),
        None     => Query::default(),
    };

    let columns = match ids.is_empty() {
        true  => registry.columns().iter().filter(|c| c.visible).collect::<Vec<_>>(),
        false => ids.iter().map(|id| lookup(registry, id)).collect::<Result<Vec<_>>>()?,
    };

    let mut records = Ingest::new().parse(&read(&path)?)?;
    info!("read {} records from {}", records.len(), path);

    if !query.filters.is_empty() {
        debug!("query filters: {:?}", query.filters);
    }

    dns_latency(&mut records);

    if query.show_dup != Some(true) {
        records = combine(records);
    }

    if let Some(id) = order {
        sort(&mut records, lookup(registry, id)?, desc);
    }

    if let Some(limit) = query.limit {
        records.truncate(limit as usize);
    }

    let header = columns.iter().map(|c| c.id.as_str()).collect::<Vec<_>>();
    println!("{}", header.join("\t"));

    for r in &records {
        let row = columns.iter().map(|c| {
            c.value(r).map(|v| v.to_string()).unwrap_or_default()
        }).collect::<Vec<_>>();
        println!("{}", row.join("\t"));
    }

    Ok(())
}

fn lookup<'a>(registry: &'a Registry, id: &str) -> Result<&'a Column> {
    registry.get(id).ok_or_else(|| anyhow!("unknown column '{}'", id))
}
