//! Names of the raw record attributes the engine itself interprets.

pub const FLOW_DIRECTION:   &str = "FlowDirection";
pub const RECORD_TYPE:      &str = "_RecordType";
pub const PROTO:            &str = "Proto";
pub const SRC_ADDR:         &str = "SrcAddr";
pub const SRC_PORT:         &str = "SrcPort";
pub const DST_ADDR:         &str = "DstAddr";
pub const DST_PORT:         &str = "DstPort";
pub const TIME_START:       &str = "TimeFlowStartMs";
pub const DNS_ID:           &str = "DnsId";
pub const DNS_FLAGS:        &str = "DnsFlags";
pub const DNS_LATENCY:      &str = "DnsLatencyMs";
pub const PKT_DROP_BYTES:   &str = "PktDropBytes";
pub const PKT_DROP_PACKETS: &str = "PktDropPackets";
