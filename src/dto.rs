use serde::Serialize;

use crate::auth::HashInfo;

#[derive(Debug, Serialize)]
pub struct HashResponse {
    pub hash: String,
    pub cost: u32,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub matched: bool,
    pub needs_rehash: bool,
}

#[derive(Debug, Serialize)]
pub struct InspectResponse {
    #[serde(flatten)]
    pub info: HashInfo,
    pub needs_rehash: bool,
}
