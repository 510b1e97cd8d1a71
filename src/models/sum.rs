use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, ToSchema)]
pub struct SumResponse {
    pub a: i64,
    pub b: i64,
    pub sum: i64,
}
