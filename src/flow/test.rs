use anyhow::Result;
use serde_json::json;
use crate::value::Value;
use super::*;

fn parse(json: serde_json::Value) -> Result<Vec<Record>> {
    Ok(Ingest::new().parse(json.to_string().as_bytes())?)
}

#[test]
fn ingest_assigns_keys() -> Result<()> {
    let mut ingest = Ingest::new();
    let batch = json!([
        { "labels": { "FlowDirection": "0" }, "fields": {} },
        { "labels": { "FlowDirection": "1" }, "fields": {} },
    ]).to_string();

    let first  = ingest.parse(batch.as_bytes())?;
    let second = ingest.parse(batch.as_bytes())?;

    let keys = first.iter().chain(&second).map(Record::key).collect::<Vec<_>>();
    assert_eq!(vec![0, 1, 2, 3], keys);
    assert_eq!(Direction::Egress, first[1].direction());

    Ok(())
}

#[test]
fn direction_is_closed() {
    let bad = json!([{ "labels": { "FlowDirection": "2" }, "fields": {} }]);
    assert!(parse(bad).is_err());
    assert_eq!(Ok(Direction::Ingress), "ingress".parse());
    assert_eq!(Ok(Direction::Egress), "1".parse());
}

#[test]
fn lookup_fields_then_labels() -> Result<()> {
    let rs = parse(json!([{
        "labels": {
            "FlowDirection":    "1",
            "_RecordType":      "flowLog",
            "SrcK8S_Namespace": "default",
        },
        "fields": {
            "SrcPort": 443,
            "DnsId":   null,
        },
    }]))?;

    let r = &rs[0];
    assert_eq!(Some(Value::Num(443.0)), r.get("SrcPort"));
    assert_eq!(Some(Value::Str("default".to_owned())), r.get("SrcK8S_Namespace"));
    assert_eq!(Some(Value::Str("1".to_owned())), r.get("FlowDirection"));
    assert_eq!(Some(Value::Str("flowLog".to_owned())), r.get("_RecordType"));
    assert_eq!(None, r.get("DnsId"));
    assert_eq!(None, r.get("Missing"));

    Ok(())
}

#[test]
fn key_ignores_direction() -> Result<()> {
    let rs = parse(json!([
        { "labels": { "FlowDirection": "0" }, "fields": {
            "Proto": 6, "SrcAddr": "10.0.0.1", "SrcPort": 40000, "DstAddr": "10.0.0.2", "DstPort": 80,
        }},
        { "labels": { "FlowDirection": "1" }, "fields": {
            "Proto": 6, "SrcAddr": "10.0.0.2", "SrcPort": 80, "DstAddr": "10.0.0.1", "DstPort": 40000,
        }},
        { "labels": { "FlowDirection": "1" }, "fields": {
            "Proto": 17, "SrcAddr": "10.0.0.2", "SrcPort": 80, "DstAddr": "10.0.0.1", "DstPort": 40000,
        }},
    ]))?;

    assert_eq!(rs[0].flow_key(), rs[1].flow_key());
    assert_ne!(rs[0].flow_key(), rs[2].flow_key());

    Ok(())
}

#[test]
fn labels_of_any_json_type() -> Result<()> {
    let rs = parse(json!([
        { "labels": { "FlowDirection": "0", "Zone": 3, "Tagged": true, "Extra": null }, "fields": {} },
        { "labels": { "FlowDirection": "1", "Zone": "east" }, "fields": {} },
    ]))?;

    assert_eq!(2, rs.len());
    assert_eq!(Some(Value::Num(3.0)), rs[0].get("Zone"));
    assert_eq!(Some(Value::Str("true".to_owned())), rs[0].get("Tagged"));
    assert_eq!(None, rs[0].get("Extra"));
    assert_eq!(Some(Value::Str("east".to_owned())), rs[1].get("Zone"));

    Ok(())
}
