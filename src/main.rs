use anyhow::Result;
use clap::{App, load_yaml};
use env_logger::Builder;
use log::info;
use log::LevelFilter::*;
use flowview::cmd;
use flowview::column::Registry;
use flowview::config::Config;

fn main() -> Result<()> {
    let yaml = load_yaml!("args.yml");
    let ver  = env!("CARGO_PKG_VERSION");
    let args = App::from_yaml(&yaml).version(ver).get_matches();

    let (module, level) = match args.occurrences_of("verbose") {
        0 => (Some(module_path!()), Info),
        1 => (Some(module_path!()), Debug),
        2 => (Some(module_path!()), Trace),
        _ => (None,                 Trace),
    };
    Builder::from_default_env().filter(module, level).init();

    info!("initializing flowview {}", ver);

    let config = match args.value_of("config") {
        Some(path) => Config::load(path)?,
        None       => Config::embedded()?,
    };

    let registry = Registry::new(&config)?;

    match args.subcommand() {
        ("columns", Some(args)) => cmd::columns(&registry, args),
        ("filter",  Some(args)) => cmd::filter(&registry, args),
        ("show",    Some(args)) => cmd::show(&registry, args),
        _                       => unreachable!(),
    }
}
