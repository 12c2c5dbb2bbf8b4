pub const ANOMALY: &str = "anomaly";
pub const DEDUP: &str = "dedup";
pub const DIFF: &str = "diff";
pub const DISPLAY: &str = "display";
pub const FIELDS: &str = "fields";
pub const FILTER: &str = "filter";
pub const LIMIT: &str = "limit";
pub const PARSE: &str = "parse";
pub const PATTERN: &str = "pattern";
pub const SORT: &str = "sort";
pub const STATS: &str = "stats";
pub const UNMASK: &str = "unmask";

pub const COMMANDS: [&str; 12] = [
    ANOMALY, DEDUP, DIFF, DISPLAY, FIELDS, FILTER, LIMIT, PARSE, PATTERN, SORT, STATS, UNMASK,
];

pub const AS: &str = "as";
pub const BY: &str = "by";
pub const IN: &str = "in";
pub const LIKE: &str = "like";
pub const ASC: &str = "asc";
pub const DESC: &str = "desc";

pub const KEYWORDS: [&str; 6] = [AS, BY, IN, LIKE, ASC, DESC];

pub const AND: &str = "and";
pub const OR: &str = "or";
pub const NOT: &str = "not";

pub const BOOLEAN_OPERATORS: [&str; 3] = [AND, OR, NOT];

pub const COMPARISON_OPERATORS: [&str; 6] = ["=", "!=", "<", "<=", ">", ">="];

pub const ARITHMETIC_OPERATORS: [&str; 6] = ["+", "-", "*", "/", "^", "%"];

pub const SORT_DIRECTIONS: [&str; 2] = [ASC, DESC];

/// Functions only valid as `stats` aggregations.
pub const AGGREGATION_FUNCTIONS: [&str; 12] = [
    "avg",
    "count",
    "count_distinct",
    "earliest",
    "latest",
    "max",
    "min",
    "pct",
    "sortsFirst",
    "sortsLast",
    "stddev",
    "sum",
];

pub const STRING_FUNCTIONS: [&str; 13] = [
    "concat",
    "isblank",
    "isempty",
    "ltrim",
    "replace",
    "rtrim",
    "strcontains",
    "strlen",
    "substr",
    "tolower",
    "toupper",
    "trim",
    "ispresent",
];

pub const NUMERIC_FUNCTIONS: [&str; 7] = ["abs", "ceil", "floor", "greatest", "least", "log", "sqrt"];

pub const DATETIME_FUNCTIONS: [&str; 5] = ["bin", "datefloor", "dateceil", "fromMillis", "toMillis"];

pub const IP_FUNCTIONS: [&str; 6] = [
    "isValidIp",
    "isValidIpV4",
    "isValidIpV6",
    "isIpInSubnet",
    "isIpv4InSubnet",
    "isIpv6InSubnet",
];

pub const GENERAL_FUNCTIONS: [&str; 1] = ["coalesce"];

/// Every non-aggregation function.
pub fn functions() -> impl Iterator<Item = &'static str> {
    STRING_FUNCTIONS
        .into_iter()
        .chain(NUMERIC_FUNCTIONS)
        .chain(DATETIME_FUNCTIONS)
        .chain(IP_FUNCTIONS)
        .chain(GENERAL_FUNCTIONS)
}

pub(crate) fn contains(list: &[&str], word: &str) -> bool {
    list.iter().any(|w| w.eq_ignore_ascii_case(word))
}
