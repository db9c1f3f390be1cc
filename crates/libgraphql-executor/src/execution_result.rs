use crate::LocatedError;
use crate::cost::CostDetail;
use crate::cost::QueryCost;

/// The response envelope for a single operation.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    pub data: serde_json::Value,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<LocatedError>,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub query_complexity: u64,

    #[serde(default, skip_serializing_if = "CostDetail::is_empty")]
    pub query_complexity_details: CostDetail,
}
impl ExecutionResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn new(data: serde_json::Value) -> Self {
        Self {
            data,
            ..Default::default()
        }
    }

    pub fn with_errors(
        mut self,
        errors: impl IntoIterator<Item = LocatedError>,
    ) -> Self {
        self.errors.extend(errors);
        self
    }

    pub fn with_query_cost(mut self, cost: QueryCost) -> Self {
        self.query_complexity = cost.total;
        self.query_complexity_details = cost.detail;
        self
    }
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}
