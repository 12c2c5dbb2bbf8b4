pub const SEARCH: &str = "SEARCH";

pub const FUNCTIONS: [&str; 40] = [
    "ABS",
    "ANOMALY_DETECTION_BAND",
    "AVG",
    "CEIL",
    "DATAPOINT_COUNT",
    "DIFF",
    "DIFF_TIME",
    "FILL",
    "FIRST",
    "FLOOR",
    "IF",
    "INSIGHT_RULE_METRIC",
    "LAST",
    "LOG",
    "LOG10",
    "MAX",
    "METRIC_COUNT",
    "METRICS",
    "MIN",
    "MINUTE",
    "HOUR",
    "DAY",
    "DATE",
    "MONTH",
    "DAY_OF_WEEK",
    "EPOCH",
    "PERIOD",
    "RATE",
    "REMOVE_EMPTY",
    "RUNNING_SUM",
    "SEARCH",
    "SERVICE_QUOTA",
    "SLICE",
    "SORT",
    "STDDEV",
    "SUM",
    "TIME_SERIES",
    "SQRT",
    "LAMBDA",
    "CONCAT",
];

/// Bare keyword arguments (FILL modes, SORT orders).
pub const KEYWORD_ARGUMENTS: [&str; 5] = ["REPEAT", "LINEAR", "ARRAY", "ASC", "DESC"];

pub const STATISTICS: [&str; 10] = [
    "Average",
    "Maximum",
    "Minimum",
    "Sum",
    "SampleCount",
    "IQM",
    "p50",
    "p90",
    "p95",
    "p99",
];

/// Periods in seconds.
pub const PERIODS: [u32; 8] = [10, 60, 300, 900, 3600, 21600, 86400, 604800];
