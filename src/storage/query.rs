//! Filtered list query building.
//!
//! Predicates are composed with sea-query and rendered with placeholders;
//! caller-supplied values only ever travel in `ListQuery::values`.

use sea_query::{Expr, Order, Query, SelectStatement, SqliteQueryBuilder, Values};

use super::schema::ListingTable;

/// Domain-neutral list filter.
///
/// Each service converts its wire filter into this shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Restrict to these grouping ids (meeting, competition). Empty means
    /// no restriction.
    pub grouping_ids: Vec<i64>,
    /// Only return rows flagged visible.
    pub visible_only: bool,
    /// Raw order directive. Only the exact strings "ASC" and "DESC" are
    /// honored; anything else keeps the default ascending order.
    pub order_by: Option<String>,
}

impl ListFilter {
    /// Sort order requested by this filter, if it names a valid one.
    pub fn sort_order(&self) -> Option<SortOrder> {
        self.order_by.as_deref().and_then(SortOrder::parse)
    }
}

/// Direction of the advertised start time ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse an order directive. Case-sensitive.
    pub fn parse(directive: &str) -> Option<Self> {
        match directive {
            "ASC" => Some(SortOrder::Asc),
            "DESC" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    fn order(self) -> Order {
        match self {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

/// A rendered query and its positional arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub sql: String,
    pub values: Values,
}

impl ListQuery {
    /// Build the list query for `T`, applying `filter` when present.
    ///
    /// Clauses are AND-joined as grouping membership, then visibility.
    /// Ordering on advertised start time is always applied.
    pub fn list<T: ListingTable>(filter: Option<&ListFilter>) -> Self {
        let mut stmt = select_all::<T>();
        let mut order = SortOrder::default();

        if let Some(filter) = filter {
            // An empty IN () is invalid on some engines; skip the clause.
            if !filter.grouping_ids.is_empty() {
                stmt.and_where(
                    Expr::col(T::GROUPING_ID).is_in(filter.grouping_ids.iter().copied()),
                );
            }

            if filter.visible_only {
                stmt.and_where(Expr::col(T::VISIBLE).eq(Expr::cust("true")));
            }

            if let Some(requested) = filter.sort_order() {
                order = requested;
            }
        }

        stmt.order_by(T::ADVERTISED_START_TIME, order.order());
        Self::render(&stmt)
    }

    /// Build the single-record lookup for `T`: the unfiltered list query
    /// restricted to `id`, which is bound as a parameter.
    pub fn get<T: ListingTable>(id: i64) -> Self {
        let mut stmt = select_all::<T>();
        stmt.and_where(Expr::col(T::ID).eq(id))
            .order_by(T::ADVERTISED_START_TIME, SortOrder::default().order());
        Self::render(&stmt)
    }

    fn render(stmt: &SelectStatement) -> Self {
        let (sql, values) = stmt.build(SqliteQueryBuilder);
        Self { sql, values }
    }
}

fn select_all<T: ListingTable>() -> SelectStatement {
    Query::select()
        .columns(T::columns())
        .from(T::TABLE)
        .to_owned()
}
