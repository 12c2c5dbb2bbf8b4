pub const SELECT: &str = "SELECT";
pub const FROM: &str = "FROM";
pub const SCHEMA: &str = "SCHEMA";
pub const WHERE: &str = "WHERE";
pub const GROUP: &str = "GROUP";
pub const ORDER: &str = "ORDER";
pub const BY: &str = "BY";
pub const LIMIT: &str = "LIMIT";
pub const ASC: &str = "ASC";
pub const DESC: &str = "DESC";
pub const AND: &str = "AND";
pub const OR: &str = "OR";

pub const GROUP_BY: &str = "GROUP BY";
pub const ORDER_BY: &str = "ORDER BY";

pub const KEYWORDS: [&str; 10] = [SELECT, FROM, SCHEMA, WHERE, GROUP, ORDER, BY, LIMIT, ASC, DESC];

/// Aggregations applied to the selected metric.
pub const STATISTICS: [&str; 5] = ["AVG", "COUNT", "MAX", "MIN", "SUM"];

pub const LOGICAL_OPERATORS: [&str; 2] = [AND, OR];

pub const COMPARISON_OPERATORS: [&str; 2] = ["=", "!="];

pub const SORT_DIRECTIONS: [&str; 2] = [ASC, DESC];
