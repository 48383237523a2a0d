use shared::metrics_defs::{MetricDef, MetricType};

pub const PROVIDER_FAILURES: MetricDef = MetricDef {
    name: "flights.provider.failures",
    metric_type: MetricType::Counter,
    description: "Provider responses dropped from a merged result. Tagged with airline.",
};

pub const SEARCH_REQUESTS: MetricDef = MetricDef {
    name: "flights.search.requests",
    metric_type: MetricType::Counter,
    description: "Flight search requests processed. Tagged with outcome.",
};

pub const ALL_METRICS: &[MetricDef] = &[PROVIDER_FAILURES, SEARCH_REQUESTS];
