use std::fmt;
use serde_json::Value as Json;
use super::{KubeObject, ValueType};

/// A derived column value. Absence of a value is modelled as `None` by
/// callers, never as an empty string or zero.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Str(String),
    Num(f64),
    List(Vec<Option<Value>>),
    Kube(KubeObject),
}

impl Value {
    pub fn from_json(json: &Json) -> Option<Value> {
        match json {
            Json::String(s) => Some(Value::Str(s.clone())),
            Json::Number(n) => n.as_f64().map(Value::Num),
            Json::Bool(b)   => Some(Value::Str(b.to_string())),
            Json::Array(vs) => Some(Value::List(vs.iter().map(Value::from_json).collect())),
            Json::Null      => None,
            Json::Object(_) => None,
        }
    }

    /// Whether the value counts as present in a fallback chain: non-empty
    /// strings, non-zero numbers, lists with at least one element present.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Str(s)   => !s.is_empty(),
            Value::Num(n)   => *n != 0.0 && !n.is_nan(),
            Value::List(vs) => vs.iter().any(Option::is_some),
            Value::Kube(_)  => true,
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            Value::Num(n) => Some(*n),
            Value::Str(s) => s.trim().parse().ok(),
            Value::List(_) | Value::Kube(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _             => None,
        }
    }

    /// Coerce scalars to the declared type. Lists and objects pass through.
    pub fn coerce(self, kind: ValueType) -> Value {
        match (self, kind.is_numeric()) {
            (Value::Str(s), true)  => Value::Num(s.trim().parse().unwrap_or(f64::NAN)),
            (Value::Num(n), false) => Value::Str(number(n)),
            (v, _)                 => v,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Str(s)  => f.write_str(s),
            Value::Num(n)  => f.write_str(&number(*n)),
            Value::Kube(o) => write!(f, "{}", o),
            Value::List(vs) => {
                let vs = vs.iter().map(|v| match v {
                    Some(v) => v.to_string(),
                    None    => String::new(),
                }).collect::<Vec<_>>();
                f.write_str(&vs.join(", "))
            }
        }
    }
}

/// Integral numbers print without a fractional part.
pub(crate) fn number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
