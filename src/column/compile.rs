use std::sync::Arc;
use crate::flow::Record;
use crate::value::{KubeObject, Value};
use crate::{Error, Result};
use super::{Expr, Func};

/// Compiled value extraction function.
pub type Getter = Arc<dyn Fn(&Record) -> Option<Value> + Send + Sync>;

/// Compile an expression into a closure. Column references are resolved
/// through `lookup` once, here, never per record.
pub fn compile<F>(expr: &Expr, lookup: &F) -> Result<Getter>
    where F: Fn(&str) -> Option<Getter>
{
    let getter: Getter = match expr {
        Expr::Field(name) => {
            let name = name.clone();
            Arc::new(move |r: &Record| r.get(&name))
        },
        Expr::Column(id) => {
            lookup(id.as_str()).ok_or_else(|| Error::UnknownColumn(id.clone()))?
        },
        Expr::Literal(s) => {
            let value = Value::Str(s.clone());
            Arc::new(move |_: &Record| Some(value.clone()))
        },
        Expr::Number(n) => {
            let n = *n;
            Arc::new(move |_: &Record| Some(Value::Num(n)))
        },
        Expr::List(items) => {
            let items = all(items, lookup)?;
            Arc::new(move |r: &Record| Some(list(&items, r)))
        },
        Expr::Or(alts) => {
            let alts = all(alts, lookup)?;
            Arc::new(move |r: &Record| {
                alts.iter().filter_map(|g| g(r)).find(Value::is_truthy)
            })
        },
        Expr::Call(func, args) => call(*func, args, lookup)?,
    };

    Ok(getter)
}

fn all<F>(exprs: &[Expr], lookup: &F) -> Result<Vec<Getter>>
    where F: Fn(&str) -> Option<Getter>
{
    exprs.iter().map(|e| compile(e, lookup)).collect()
}

fn call<F>(func: Func, args: &[Expr], lookup: &F) -> Result<Getter>
    where F: Fn(&str) -> Option<Getter>
{
    let factor = match (func, args.get(1)) {
        (Func::Multiply, Some(Expr::Number(n)))  => Some(*n),
        (Func::Multiply, Some(Expr::Literal(s))) => s.parse().ok(),
        _                                        => None,
    };

    let args = all(args, lookup)?;

    if func == Func::Concat {
        return Ok(Arc::new(move |r: &Record| {
            let s = args.iter().map(|g| text(g, r)).collect::<String>();
            Some(Value::Str(s))
        }));
    }

    let getter: Getter = match (func, args.as_slice()) {
        (Func::KubeObject, [kind, ns, name, show]) => {
            let (kind, ns, name, show) = (kind.clone(), ns.clone(), name.clone(), show.clone());
            Arc::new(move |r: &Record| {
                let show = show(r).map(|v| flag(&v)).unwrap_or(false);
                let obj  = KubeObject::new(text(&kind, r), text(&ns, r), text(&name, r), show)?;
                Some(Value::Kube(obj))
            })
        },
        (Func::Subtract, [a, b]) => {
            let (a, b) = (a.clone(), b.clone());
            Arc::new(move |r: &Record| {
                let a = a(r)?.as_num()?;
                let b = b(r)?.as_num()?;
                Some(Value::Num(a - b))
            })
        },
        (Func::Multiply, [a, _]) => {
            let a      = a.clone();
            let factor = factor.ok_or_else(|| {
                Error::Parse(func.name().to_owned(), "factor must be numeric".to_owned())
            })?;
            Arc::new(move |r: &Record| {
                Some(Value::Num(a(r)?.as_num()? * factor))
            })
        },
        (_, args) => return Err(Error::Arity {
            func:     func.name(),
            expected: "a different number of",
            found:    args.len(),
        }),
    };

    Ok(getter)
}

/// Evaluate list items in order, splicing nested lists in place.
fn list(items: &[Getter], r: &Record) -> Value {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item(r) {
            Some(Value::List(vs)) => out.extend(vs),
            v                     => out.push(v),
        }
    }
    Value::List(out)
}

fn text(g: &Getter, r: &Record) -> String {
    g(r).map(|v| v.to_string()).unwrap_or_default()
}

fn flag(v: &Value) -> bool {
    match (v, v.as_num()) {
        (_, Some(n))       => n != 0.0,
        (Value::Str(s), _) => !s.is_empty() && !s.eq_ignore_ascii_case("false"),
        _                  => v.is_truthy(),
    }
}
