use std::cmp::Ordering::{self, *};
use std::convert::TryFrom;
use crate::value::{KubeObject, Value, ValueType};
use super::compare::*;

/// Comparator over optional column values.
pub type Compare = fn(Option<&Value>, Option<&Value>) -> Ordering;

type Scalar = fn(&Value, &Value) -> Ordering;

pub fn comparator(kind: ValueType) -> Compare {
    match kind {
        ValueType::String   => by_string,
        ValueType::Number   => by_number,
        ValueType::Address  => by_address,
        ValueType::Port     => by_port,
        ValueType::Protocol => by_protocol,
    }
}

fn by_string(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    values(a, b, string)
}

fn by_number(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    values(a, b, number)
}

fn by_address(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    values(a, b, address)
}

fn by_port(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    values(a, b, port)
}

fn by_protocol(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    values(a, b, protocol)
}

fn values(a: Option<&Value>, b: Option<&Value>, scalar: Scalar) -> Ordering {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        (Some(_), None)    => return Less,
        (None,    Some(_)) => return Greater,
        (None,    None)    => return Equal,
    };

    match (a, b) {
        (Value::List(xs), Value::List(ys)) => {
            xs.iter().zip(ys).map(|(x, y)| {
                values(x.as_ref(), y.as_ref(), scalar)
            }).find(|o| *o != Equal).unwrap_or_else(|| xs.len().cmp(&ys.len()))
        },
        (Value::Kube(x), Value::Kube(y)) => kube(x, y),
        _ if rank(a) == rank(b)          => scalar(a, b),
        _                                => rank(a).cmp(&rank(b)),
    }
}

fn rank(v: &Value) -> u8 {
    match v {
        Value::Str(_) | Value::Num(_) => 0,
        Value::Kube(_)                => 1,
        Value::List(_)                => 2,
    }
}

fn kube(a: &KubeObject, b: &KubeObject) -> Ordering {
    strings(Some(a.kind.as_str()), Some(b.kind.as_str())).then_with(|| {
        strings(a.namespace.as_deref(), b.namespace.as_deref())
    }).then_with(|| {
        strings(Some(a.name.as_str()), Some(b.name.as_str()))
    })
}

fn string(a: &Value, b: &Value) -> Ordering {
    strings(Some(a.to_string().as_str()), Some(b.to_string().as_str()))
}

fn number(a: &Value, b: &Value) -> Ordering {
    numbers(a.as_num(), b.as_num())
}

fn address(a: &Value, b: &Value) -> Ordering {
    addresses(Some(a.to_string().as_str()), Some(b.to_string().as_str()))
}

fn port(a: &Value, b: &Value) -> Ordering {
    ports(integral(a), integral(b))
}

fn protocol(a: &Value, b: &Value) -> Ordering {
    protocols(integral(a), integral(b))
}

fn integral<T: TryFrom<i64>>(v: &Value) -> Option<T> {
    let n = v.as_num().filter(|n| n.fract() == 0.0)?;
    T::try_from(n as i64).ok()
}
