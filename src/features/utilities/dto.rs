use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BinaryMathArgs {
    pub a: i64,
    pub b: i64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MathResultDto {
    pub result: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentDatetimeDto {
    pub utc: String,
    pub local: String,
}
