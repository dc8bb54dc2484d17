pub use kind::ValueType;
pub use kube::KubeObject;
pub use value::Value;

mod kind;
mod kube;
mod value;
