use anyhow::Result;
use serde_json::json;
use crate::config::{ColumnConfig, Config};
use crate::filter::{FilterKind, FilterValue};
use crate::flow::{Ingest, Record};
use crate::value::{Value, ValueType};
use crate::Error;
use super::*;

fn field(id: &str, kind: ValueType) -> ColumnConfig {
    ColumnConfig {
        id:    id.to_owned(),
        name:  id.to_owned(),
        field: Some(id.to_owned()),
        kind:  kind,
        ..Default::default()
    }
}

fn calc(id: &str, src: &str) -> ColumnConfig {
    ColumnConfig {
        id:         id.to_owned(),
        name:       id.to_owned(),
        calculated: Some(src.to_owned()),
        ..Default::default()
    }
}

fn records(json: serde_json::Value) -> Result<Vec<Record>> {
    Ok(Ingest::new().parse(json.to_string().as_bytes())?)
}

fn flow(fields: serde_json::Value) -> Result<Record> {
    let rs = records(json!([{ "labels": { "FlowDirection": "0" }, "fields": fields }]))?;
    Ok(rs.into_iter().next().expect("record"))
}

fn text(s: &str) -> Option<Value> {
    Some(Value::Str(s.to_owned()))
}

#[test]
fn parse_grammar() -> Result<()> {
    assert_eq!(Expr::Field("SrcAddr".to_owned()), parse("SrcAddr")?);
    assert_eq!(Expr::Column("SrcAddr".to_owned()), parse("column.SrcAddr")?);
    assert_eq!(Expr::Literal(":".to_owned()), parse("':'")?);

    let expr = parse("column.a or [b, 'c'] or multiply(d, 0.5)")?;
    assert_eq!(Expr::Or(vec![
        Expr::Column("a".to_owned()),
        Expr::List(vec![Expr::Field("b".to_owned()), Expr::Literal("c".to_owned())]),
        Expr::Call(Func::Multiply, vec![Expr::Field("d".to_owned()), Expr::Number(0.5)]),
    ]), expr);
    assert_eq!(vec!["a"], expr.columns());

    Ok(())
}

#[test]
fn parse_errors() {
    let cases = [
        "",
        "concat(a)",
        "kubeObject(a, b, c)",
        "subtract(a, b, c)",
        "multiply(a, b)",
        "nope(a, b)",
        "[a, b",
        "'open",
        "a b",
        "column.",
        "a or",
    ];

    for src in cases.iter() {
        assert!(parse(src).is_err(), "{} parsed", src);
    }

    match parse("kubeObject(a, b, c)") {
        Err(Error::Arity { func, found, .. }) => {
            assert_eq!("kubeObject", func);
            assert_eq!(3, found);
        },
        other => panic!("expected arity error, got {:?}", other),
    }
}

#[test]
fn functions() -> Result<()> {
    let reg = Registry::build(&[
        calc("Pair",     "concat(SrcAddr, ':', SrcPort)"),
        calc("Duration", "subtract(TimeFlowEndMs, TimeFlowStartMs)"),
        calc("Rtt",      "multiply(TimeFlowRttNs, 0.000001)"),
        calc("Obj",      "kubeObject(SrcK8S_Type, SrcK8S_Namespace, SrcK8S_Name, 1)"),
    ])?;

    let r = flow(json!({
        "SrcAddr":          "10.0.0.1",
        "SrcPort":          443,
        "TimeFlowStartMs":  1000,
        "TimeFlowEndMs":    1500,
        "TimeFlowRttNs":    2000000,
        "SrcK8S_Type":      "Pod",
        "SrcK8S_Namespace": "",
        "SrcK8S_Name":      "web",
    }))?;

    let value = |id: &str| reg.get(id).and_then(|c| c.value(&r));

    assert_eq!(text("10.0.0.1:443"), value("Pair"));
    assert_eq!(text("500"), value("Duration"));
    assert_eq!(text("2"), value("Rtt"));

    match value("Obj") {
        Some(Value::Kube(o)) => {
            assert_eq!("Pod", o.kind);
            assert_eq!("web", o.name);
            assert_eq!(None, o.namespace);
            assert!(o.show_namespace);
        },
        other => panic!("expected object, got {:?}", other),
    }

    let empty = flow(json!({ "SrcK8S_Type": "Pod", "SrcK8S_Name": "" }))?;
    assert_eq!(None, reg.get("Obj").and_then(|c| c.value(&empty)));
    assert_eq!(None, reg.get("Duration").and_then(|c| c.value(&empty)));
    assert_eq!(text(":"), reg.get("Pair").and_then(|c| c.value(&empty)));

    Ok(())
}

#[test]
fn kube_object_namespace_flag() -> Result<()> {
    let reg = Registry::build(&[
        calc("Quoted",  "kubeObject('Pod', Ns, Name, 'false')"),
        calc("Field",   "kubeObject('Pod', Ns, Name, Show)"),
        calc("Zero",    "kubeObject('Pod', Ns, Name, '0')"),
        calc("Shown",   "kubeObject('Pod', Ns, Name, 'true')"),
    ])?;

    let r = flow(json!({ "Ns": "default", "Name": "web", "Show": false }))?;

    let shown = |id: &str| match reg.get(id).and_then(|c| c.value(&r)) {
        Some(Value::Kube(o)) => Some(o.show_namespace),
        _                    => None,
    };

    assert_eq!(Some(false), shown("Quoted"));
    assert_eq!(Some(false), shown("Field"));
    assert_eq!(Some(false), shown("Zero"));
    assert_eq!(Some(true), shown("Shown"));

    Ok(())
}

#[test]
fn fallback_chain() -> Result<()> {
    let reg = Registry::build(&[
        field("a", ValueType::String),
        field("b", ValueType::String),
        calc("ab", "column.a or column.b"),
        calc("raw", "a or b"),
    ])?;

    let ab  = reg.get("ab").expect("column");
    let raw = reg.get("raw").expect("column");

    assert_eq!(text("A"), ab.value(&flow(json!({ "a": "A", "b": "B" }))?));
    assert_eq!(text("B"), ab.value(&flow(json!({ "b": "B" }))?));
    assert_eq!(text("B"), ab.value(&flow(json!({ "a": "", "b": "B" }))?));
    assert_eq!(text("B"), raw.value(&flow(json!({ "a": 0, "b": "B" }))?));
    assert_eq!(text("0"), ab.value(&flow(json!({ "a": 0, "b": "B" }))?));
    assert_eq!(None, ab.value(&flow(json!({}))?));

    Ok(())
}

#[test]
fn lists_flatten_and_keep_gaps() -> Result<()> {
    let reg = Registry::build(&[
        field("SrcAddr", ValueType::Address),
        field("DstAddr", ValueType::Address),
        calc("Addr", "[column.SrcAddr, column.DstAddr]"),
        calc("Nested", "[column.Addr, 'x']"),
    ])?;

    let r = flow(json!({ "DstAddr": "10.0.0.2" }))?;

    assert_eq!(Some(Value::List(vec![None, text("10.0.0.2")])), reg.get("Addr").and_then(|c| c.value(&r)));
    assert_eq!(
        Some(Value::List(vec![None, text("10.0.0.2"), text("x")])),
        reg.get("Nested").and_then(|c| c.value(&r)),
    );

    Ok(())
}

#[test]
fn coercion_and_defaults() -> Result<()> {
    let mut kind = calc("Kind", "_RecordType");
    kind.default = Some(json!("flowLog"));

    let reg = Registry::build(&[
        field("SrcPort", ValueType::Port),
        field("Proto", ValueType::String),
        kind,
    ])?;

    let r = flow(json!({ "SrcPort": "8080", "Proto": 6 }))?;

    assert_eq!(Some(Value::Num(8080.0)), reg.get("SrcPort").and_then(|c| c.value(&r)));
    assert_eq!(text("6"), reg.get("Proto").and_then(|c| c.value(&r)));
    assert_eq!(text("flowLog"), reg.get("Kind").and_then(|c| c.value(&r)));

    Ok(())
}

#[test]
fn configuration_errors() {
    let cycle = Registry::build(&[
        calc("a", "column.b"),
        calc("b", "concat(column.c, 'x')"),
        calc("c", "column.a or x"),
    ]);
    match cycle {
        Err(Error::Cycle(path)) => assert_eq!("a -> b -> c -> a", path),
        other => panic!("expected cycle, got {:?}", other),
    }

    let own = Registry::build(&[calc("a", "column.a")]);
    assert!(matches!(own, Err(Error::Cycle(_))));

    let unknown = Registry::build(&[calc("a", "column.missing")]);
    assert!(matches!(unknown, Err(Error::UnknownColumn(_))));

    let dup = Registry::build(&[field("a", ValueType::String), field("a", ValueType::String)]);
    assert!(matches!(dup, Err(Error::Duplicate(_))));

    let mut both = field("a", ValueType::String);
    both.calculated = Some("b".to_owned());
    assert!(matches!(Registry::build(&[both]), Err(Error::Definition(..))));

    let neither = ColumnConfig { id: "a".to_owned(), ..Default::default() };
    assert!(matches!(Registry::build(&[neither]), Err(Error::Definition(..))));

    let reserved = Registry::build(&[field("limit", ValueType::Number)]);
    assert!(matches!(reserved, Err(Error::Reserved(_))));

    let mut quick = field("a", ValueType::String);
    quick.quick_filter = Some("b".to_owned());
    let quick = Registry::build(&[quick, field("b", ValueType::String)]);
    assert!(matches!(quick, Err(Error::Definition(..))));

    let arity = Registry::build(&[calc("a", "subtract(x)")]);
    assert!(matches!(arity, Err(Error::Arity { .. })));
}

#[test]
fn unknown_types_rejected_at_load() {
    let json = |column: serde_json::Value| json!({ "columns": [column] }).to_string();

    let kind = json(json!({ "id": "a", "name": "a", "field": "a", "type": "date" }));
    assert!(Config::parse(kind.as_bytes()).is_err());

    let filter = json(json!({ "id": "a", "name": "a", "field": "a", "filter": "mac" }));
    assert!(Config::parse(filter.as_bytes()).is_err());
}

#[test]
fn sort_is_stable() -> Result<()> {
    let reg = Registry::build(&[field("SrcAddr", ValueType::Address)])?;
    let col = reg.get("SrcAddr").expect("column");

    let mut rs = records(json!([
        { "labels": { "FlowDirection": "0" }, "fields": { "SrcAddr": "10.30.10.10" } },
        { "labels": { "FlowDirection": "0" }, "fields": {} },
        { "labels": { "FlowDirection": "0" }, "fields": { "SrcAddr": "9.0.0.0" } },
        { "labels": { "FlowDirection": "1" }, "fields": { "SrcAddr": "10.10.10.10" } },
        { "labels": { "FlowDirection": "1" }, "fields": { "SrcAddr": "9.0.0.0" } },
    ]))?;

    sort(&mut rs, col, false);
    assert_eq!(vec![2, 4, 3, 0, 1], rs.iter().map(Record::key).collect::<Vec<_>>());

    sort(&mut rs, col, true);
    assert_eq!(vec![1, 0, 3, 2, 4], rs.iter().map(Record::key).collect::<Vec<_>>());

    Ok(())
}

#[test]
fn quick_filters() -> Result<()> {
    let mut name = field("SrcK8S_Name", ValueType::String);
    name.filter = Some(FilterKind::Name);

    let mut obj = calc("SrcK8S_Object", "kubeObject('Pod', SrcK8S_Namespace, SrcK8S_Name, 0)");
    obj.quick_filter = Some("SrcK8S_Name".to_owned());

    let mut port = field("SrcPort", ValueType::Port);
    port.filter = Some(FilterKind::Port);

    let reg = Registry::build(&[name, obj, port, field("Bytes", ValueType::Number)])?;
    let r   = flow(json!({ "SrcK8S_Name": "web", "SrcPort": 443, "Bytes": 10 }))?;

    let f = reg.quick_filter("SrcK8S_Object", &r).expect("filter");
    assert_eq!("SrcK8S_Name", f.column);
    assert_eq!(vec![FilterValue::new("web")], f.values);

    let f = reg.quick_filter("SrcPort", &r).expect("filter");
    assert_eq!(vec![FilterValue::with_display("443", Some("https"))], f.values);

    assert!(reg.quick_filter("Bytes", &r).is_none());
    assert_eq!(2, reg.filterable().count());

    Ok(())
}

#[test]
fn adhoc_expressions() -> Result<()> {
    let reg = Registry::build(&[field("SrcAddr", ValueType::Address)])?;
    let get = reg.compile("concat('from ', column.SrcAddr)")?;
    assert_eq!(text("from 10.0.0.1"), get(&flow(json!({ "SrcAddr": "10.0.0.1" }))?));
    assert!(reg.compile("column.DstAddr").is_err());
    Ok(())
}

#[test]
fn embedded_catalogue_builds() -> Result<()> {
    let reg = Registry::new(&Config::embedded()?)?;

    let r = flow(json!({
        "SrcAddr":     "10.0.0.1",
        "DstAddr":     "10.0.0.2",
        "SrcK8S_Name": "web",
        "SrcK8S_Type": "Pod",
        "Proto":       6,
    }))?;

    let value = |id: &str| reg.get(id).and_then(|c| c.value(&r));
    assert_eq!(text("web"), value("SrcName"));
    assert_eq!(text("10.0.0.2"), value("DstName"));
    assert_eq!(Some(Value::Num(6.0)), value("Proto"));
    assert_eq!(text("Ingress"), reg.get("FlowDirection").and_then(|c| c.validate("0").ok()).map(|v| Value::Str(v.v)));

    Ok(())
}
