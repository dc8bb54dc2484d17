use std::fmt;
use serde::{Serialize, Deserialize};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct KubeObject {
    pub kind:           String,
    pub name:           String,
    pub namespace:      Option<String>,
    pub show_namespace: bool,
}

impl KubeObject {
    /// Build an object, or nothing when kind or name is empty. An empty
    /// namespace is treated as absent.
    pub fn new(kind: String, namespace: String, name: String, show_namespace: bool) -> Option<Self> {
        if kind.is_empty() || name.is_empty() {
            return None;
        }

        let namespace = Some(namespace).filter(|ns| !ns.is_empty());

        Some(Self {
            kind:           kind,
            name:           name,
            namespace:      namespace,
            show_namespace: show_namespace,
        })
    }
}

impl fmt::Display for KubeObject {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.namespace, self.show_namespace) {
            (Some(ns), true) => write!(f, "{}.{}", ns, self.name),
            _                => write!(f, "{}", self.name),
        }
    }
}
