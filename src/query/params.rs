use std::fmt;
use url::form_urlencoded;

/// Flat query parameters: string keys mapped to one or more string values,
/// kept in first-seen key order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Params(Vec<(String, Vec<String>)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a URL query string. Repeated keys accumulate values.
    pub fn parse(qs: &str) -> Self {
        let qs = qs.strip_prefix('?').unwrap_or(qs);
        let mut params = Self::new();
        for (k, v) in form_urlencoded::parse(qs.as_bytes()) {
            params.push(&k, v.into_owned());
        }
        params
    }

    pub fn push<S: Into<String>>(&mut self, key: &str, value: S) {
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some((_, vs)) => vs.push(value.into()),
            None          => self.0.push((key.to_owned(), vec![value.into()])),
        }
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, vs)| vs.as_slice())
    }

    /// First value of a key.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|vs| vs.first()).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, vs)| (k.as_str(), vs.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        for (k, vs) in &self.0 {
            for v in vs {
                out.append_pair(k, v);
            }
        }
        out.finish()
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}
