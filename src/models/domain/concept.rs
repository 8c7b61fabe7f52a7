use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptKind {
    Definition,
    KeyPoint,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConceptCandidate {
    pub term: String,
    pub definition: String,
    #[serde(rename = "type")]
    pub kind: ConceptKind,
}
