use std::fs;
use std::str::FromStr;
use anyhow::Result;

pub fn opt<T: FromStr>(arg: Option<&str>) -> Result<Option<T>> {
    Ok(arg.map(|s| T::from_str(s).map_err(|_| {
        invalid(format!("invalid argument value '{}'", s))
    })).transpose()?)
}

pub fn read(path: &str) -> Result<Vec<u8>> {
    Ok(fs::read(path).map_err(|e| {
        invalid(format!("invalid argument '{}': {}", path, e))
    })?)
}

/// Split a comma separated argument, dropping empty items.
pub fn list(arg: Option<&str>) -> Vec<String> {
    arg.map(|s| {
        s.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect()
    }).unwrap_or_default()
}

fn invalid(msg: String) -> clap::Error {
    clap::Error::with_description(&msg, clap::ErrorKind::InvalidValue)
}
