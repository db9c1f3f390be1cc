//! Static cost estimation for executable documents.
//!
//! Every schema field may declare a flat weight with `@cost(weight: Int)`.
//! The cost of a query is the sum of the weights of every field it selects,
//! except that sibling inline fragments on an interface-typed selection are
//! treated as alternatives: only the most expensive one is counted.

mod cost_analyzer;
mod cost_detail;
mod query_cost;

pub use cost_analyzer::CostAnalyzer;
pub use cost_detail::CostDetail;
pub use query_cost::query_cost;
pub use query_cost::QueryCost;

#[cfg(test)]
mod tests;
