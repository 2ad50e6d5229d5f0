use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Plain acknowledgement for actions without a response body of their own.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Free-text reason given when rejecting, suspending or revoking.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ReasonDto {
    pub reason: String,
}
