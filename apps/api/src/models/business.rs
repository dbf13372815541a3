use serde::{Deserialize, Serialize};

/// A business entry after normalization: every field defaulted/coerced so the
/// rest of the pipeline never has to reason about missing or wrong-typed data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalBusinessRecord {
    pub name: String,
    pub city: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    pub is_hiring: bool,
    pub positions: Vec<String>,
}

/// One display bucket: all businesses in the same (city, state), members sorted
/// by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityGroup {
    pub city: String,
    pub state: String,
    pub members: Vec<CanonicalBusinessRecord>,
}
