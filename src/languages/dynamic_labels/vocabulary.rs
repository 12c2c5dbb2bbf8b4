pub const PATTERNS: [&str; 25] = [
    "${DATAPOINT_COUNT}",
    "${FIRST}",
    "${FIRST_LAST_RANGE}",
    "${FIRST_LAST_TIME_RANGE}",
    "${FIRST_TIME}",
    "${FIRST_TIME_RELATIVE}",
    "${LABEL}",
    "${LAST}",
    "${LAST_TIME}",
    "${LAST_TIME_RELATIVE}",
    "${MAX}",
    "${MAX_MIN_RANGE}",
    "${MAX_MIN_TIME_RANGE}",
    "${MAX_TIME}",
    "${MAX_TIME_RELATIVE}",
    "${MIN}",
    "${MIN_TIME}",
    "${MIN_TIME_RELATIVE}",
    "${PROP('AccountId')}",
    "${PROP('MetricName')}",
    "${PROP('Namespace')}",
    "${PROP('Period')}",
    "${PROP('Region')}",
    "${PROP('Stat')}",
    "${SUM}",
];

/// Label of the dimension-property pattern; the dimension name is typed in place.
pub const DIMENSION_PROPERTY: &str = "${PROP('Dim.')}";

/// Snippet form of [`DIMENSION_PROPERTY`]; `$` is escaped for the snippet syntax.
pub const DIMENSION_PROPERTY_SNIPPET: &str = "\\${PROP('Dim.$0')}";
