use crate::ast;
use crate::cost::CostAnalyzer;
use crate::cost::CostDetail;
use crate::operation::ExecutionContext;
use crate::operation::ExecutionContextError;
use crate::schema::Schema;
use crate::types::ObjectOrInterfaceType;

/// The estimated cost of an operation along with a per-path breakdown.
///
/// `total` always equals `detail.sum()`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct QueryCost {
    pub total: u64,
    pub detail: CostDetail,
}
impl QueryCost {
    /// Indicates if this cost is over `limit`. A cost equal to the limit is
    /// admitted.
    pub fn exceeds(&self, limit: u64) -> bool {
        self.total > limit
    }
}

/// Compute the cost of the operation selected from `document` (by
/// `operation_name`, or the document's only operation when `None`).
pub fn query_cost(
    schema: &Schema,
    document: &ast::query::Document,
    operation_name: Option<&str>,
) -> Result<QueryCost, ExecutionContextError> {
    let ctx = ExecutionContext::new(schema, document, operation_name)?;
    let root_type = ObjectOrInterfaceType::Object(ctx.operation_root_type());
    let cost = CostAnalyzer::new(&ctx).compute(ctx.selection_set(), root_type);
    log::debug!(
        "Computed cost {} for {} operation `{}` ({} path(s)).",
        cost.total,
        ctx.operation_kind(),
        ctx.operation_name().unwrap_or("<anonymous>"),
        cost.detail.len(),
    );
    Ok(cost)
}
