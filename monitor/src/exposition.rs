//! Plain-text metrics exposition consumed by external scrapers.
//!
//! Metric names, types and their order are part of the scrape contract.

use crate::types::{NetworkSnapshot, ResourceSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MetricKind {
    Gauge,
    Counter,
}

impl MetricKind {
    fn as_str(self) -> &'static str {
        match self {
            MetricKind::Gauge => "gauge",
            MetricKind::Counter => "counter",
        }
    }
}

enum MetricValue {
    Float(f64),
    Count(u64),
}

struct Metric {
    name: &'static str,
    help: &'static str,
    kind: MetricKind,
    value: MetricValue,
}

pub fn format_exposition(snapshot: &ResourceSnapshot, network: &NetworkSnapshot) -> String {
    let metrics = [
        Metric {
            name: "cpu_usage_percent",
            help: "CPU usage percentage",
            kind: MetricKind::Gauge,
            value: MetricValue::Float(snapshot.cpu_percent),
        },
        Metric {
            name: "memory_usage_percent",
            help: "Memory usage percentage",
            kind: MetricKind::Gauge,
            value: MetricValue::Float(snapshot.memory_percent),
        },
        Metric {
            name: "disk_usage_percent",
            help: "Disk usage percentage",
            kind: MetricKind::Gauge,
            value: MetricValue::Float(snapshot.disk_percent),
        },
        Metric {
            name: "network_bytes_sent",
            help: "Total bytes sent",
            kind: MetricKind::Counter,
            value: MetricValue::Count(network.bytes_sent),
        },
        Metric {
            name: "network_bytes_recv",
            help: "Total bytes received",
            kind: MetricKind::Counter,
            value: MetricValue::Count(network.bytes_recv),
        },
        Metric {
            name: "network_packets_sent",
            help: "Total packets sent",
            kind: MetricKind::Counter,
            value: MetricValue::Count(network.packets_sent),
        },
        Metric {
            name: "network_packets_recv",
            help: "Total packets received",
            kind: MetricKind::Counter,
            value: MetricValue::Count(network.packets_recv),
        },
    ];

    metrics.iter().map(Metric::render).collect()
}

impl Metric {
    /// HELP, TYPE and value lines, each terminated by a line feed.
    fn render(&self) -> String {
        let value = match self.value {
            MetricValue::Float(v) => v.to_string(),
            MetricValue::Count(v) => v.to_string(),
        };
        format!(
            "# HELP {name} {help}\n# TYPE {name} {kind}\n{name} {value}\n",
            name = self.name,
            help = self.help,
            kind = self.kind.as_str(),
        )
    }
}
