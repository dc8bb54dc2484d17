use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use log::{debug, error};
use crate::compare::comparator;
use crate::config::{ColumnConfig, Config};
use crate::filter::Filter;
use crate::flow::Record;
use crate::query::RESERVED;
use crate::value::Value;
use crate::{Error, Result};
use super::{compile, parse, Column, Expr, Getter};

/// Catalogue of compiled columns, in configuration order.
#[derive(Debug)]
pub struct Registry {
    columns: Vec<Column>,
    index:   HashMap<String, usize>,
}

impl Registry {
    pub fn new(config: &Config) -> Result<Self> {
        Self::build(&config.columns)
    }

    /// Build the catalogue, failing on any configuration error.
    pub fn build(configs: &[ColumnConfig]) -> Result<Self> {
        build(configs).map_err(|e| {
            error!("invalid column configuration: {}", e);
            e
        })
    }

    pub fn get(&self, id: &str) -> Option<&Column> {
        self.index.get(id).map(|&i| &self.columns[i])
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn filterable(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.filter.is_some())
    }

    /// Compile an ad-hoc expression against the catalogue.
    pub fn compile(&self, src: &str) -> Result<Getter> {
        compile(&parse(src)?, &|id: &str| self.get(id).map(|c| c.value.clone()))
    }

    /// Filter derived from a record's value in a column, targeting the
    /// column's quick filter when it declares one.
    pub fn quick_filter(&self, id: &str, r: &Record) -> Option<Filter> {
        let column = self.get(id)?;
        let target = match &column.quick_filter {
            Some(q) => self.get(q)?,
            None    => column,
        };

        let raw = match column.value(r)? {
            Value::Str(s)  => s,
            Value::Kube(o) => o.name,
            Value::List(_) => return None,
            v              => v.to_string(),
        };

        let value = target.validate(&raw).ok()?;

        Some(Filter {
            column: target.id.clone(),
            values: vec![value],
        })
    }
}

fn build(configs: &[ColumnConfig]) -> Result<Registry> {
    let mut seen = HashSet::new();
    let mut exprs = Vec::with_capacity(configs.len());

    for cfg in configs {
        if cfg.id.is_empty() {
            return Err(Error::Definition(cfg.name.clone(), "empty id".to_owned()));
        }

        if !seen.insert(cfg.id.as_str()) {
            return Err(Error::Duplicate(cfg.id.clone()));
        }

        if RESERVED.contains(&cfg.id.as_str()) {
            return Err(Error::Reserved(cfg.id.clone()));
        }

        exprs.push(source(cfg)?);
    }

    let index = configs.iter().enumerate().map(|(i, cfg)| {
        (cfg.id.clone(), i)
    }).collect::<HashMap<_, _>>();

    for cfg in configs {
        if let Some(q) = &cfg.quick_filter {
            let target = index.get(q).map(|&i| &configs[i]);
            if target.and_then(|t| t.filter).is_none() {
                let msg = format!("quick filter {} is not a filterable column", q);
                return Err(Error::Definition(cfg.id.clone(), msg));
            }
        }
    }

    let mut getters: Vec<Option<Getter>> = vec![None; configs.len()];

    for i in order(configs, &exprs, &index)? {
        let cfg  = &configs[i];
        let kind = cfg.kind;
        let raw  = {
            let lookup = |id: &str| index.get(id).and_then(|&j| getters[j].clone());
            compile(&exprs[i], &lookup)?
        };

        let default = cfg.default.as_ref().and_then(Value::from_json).map(|v| v.coerce(kind));

        let getter: Getter = Arc::new(move |r: &Record| {
            raw(r).map(|v| v.coerce(kind)).or_else(|| default.clone())
        });

        debug!("compiled column {} ({:?})", cfg.id, kind);

        getters[i] = Some(getter);
    }

    let columns = configs.iter().zip(getters).map(|(cfg, getter)| {
        let value = getter.ok_or_else(|| Error::UnknownColumn(cfg.id.clone()))?;
        Ok(Column {
            id:           cfg.id.clone(),
            name:         cfg.name.clone(),
            group:        cfg.group.clone(),
            tooltip:      cfg.tooltip.clone(),
            doc_url:      cfg.doc_url.clone(),
            filter:       cfg.filter,
            quick_filter: cfg.quick_filter.clone(),
            kind:         cfg.kind,
            width:        cfg.width,
            visible:      cfg.visible,
            value:        value,
            order:        comparator(cfg.kind),
        })
    }).collect::<Result<Vec<_>>>()?;

    Ok(Registry {
        columns: columns,
        index:   index,
    })
}

/// Expression producing a column's value: exactly one of a calculated
/// expression, a single field, or a list of fields.
fn source(cfg: &ColumnConfig) -> Result<Expr> {
    match (&cfg.calculated, &cfg.field, &cfg.fields) {
        (Some(src), None, None) => parse(src),
        (None, Some(f), None)   => Ok(Expr::Field(f.clone())),
        (None, None, Some(fs)) if !fs.is_empty() => {
            Ok(Expr::List(fs.iter().cloned().map(Expr::Field).collect()))
        },
        _ => {
            let msg = "exactly one of calculated, field or fields is required";
            Err(Error::Definition(cfg.id.clone(), msg.to_owned()))
        },
    }
}

#[derive(Copy, Clone, Eq, PartialEq)]
enum Mark {
    New,
    Active,
    Done,
}

struct Walk<'a> {
    configs: &'a [ColumnConfig],
    exprs:   &'a [Expr],
    index:   &'a HashMap<String, usize>,
    marks:   Vec<Mark>,
    path:    Vec<usize>,
    order:   Vec<usize>,
}

/// Dependency order of the columns; referenced columns come first.
fn order(configs: &[ColumnConfig], exprs: &[Expr], index: &HashMap<String, usize>) -> Result<Vec<usize>> {
    let mut walk = Walk {
        configs: configs,
        exprs:   exprs,
        index:   index,
        marks:   vec![Mark::New; configs.len()],
        path:    Vec::new(),
        order:   Vec::with_capacity(configs.len()),
    };

    for i in 0..configs.len() {
        walk.visit(i)?;
    }

    Ok(walk.order)
}

impl<'a> Walk<'a> {
    fn visit(&mut self, i: usize) -> Result<()> {
        match self.marks[i] {
            Mark::Done   => return Ok(()),
            Mark::Active => return Err(self.cycle(i)),
            Mark::New    => (),
        }

        self.marks[i] = Mark::Active;
        self.path.push(i);

        let exprs = self.exprs;
        for id in exprs[i].columns() {
            match self.index.get(id) {
                Some(&j) => self.visit(j)?,
                None     => return Err(Error::UnknownColumn(id.to_owned())),
            }
        }

        self.path.pop();
        self.marks[i] = Mark::Done;
        self.order.push(i);

        Ok(())
    }

    fn cycle(&self, i: usize) -> Error {
        let start = self.path.iter().position(|&j| j == i).unwrap_or(0);
        let ids   = self.path[start..].iter().chain(Some(&i)).map(|&j| {
            self.configs[j].id.as_str()
        }).collect::<Vec<_>>();
        Error::Cycle(ids.join(" -> "))
    }
}
