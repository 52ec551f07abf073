use crate::core::error::AppError;
use crate::features::utilities::dto::{BinaryMathArgs, MathResultDto};

pub struct MathService;

impl Default for MathService {
    fn default() -> Self {
        Self::new()
    }
}

// All operations use checked arithmetic: the input schema only bounds the
// arguments to integers, so i64 overflow is reachable from valid requests
// and must come back as a bad request, not a panic.
impl MathService {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, args: BinaryMathArgs) -> Result<MathResultDto, AppError> {
        args.a
            .checked_add(args.b)
            .map(|result| MathResultDto { result })
            .ok_or_else(|| overflow_error("+", args))
    }

    pub fn subtract(&self, args: BinaryMathArgs) -> Result<MathResultDto, AppError> {
        args.a
            .checked_sub(args.b)
            .map(|result| MathResultDto { result })
            .ok_or_else(|| overflow_error("-", args))
    }

    pub fn multiply(&self, args: BinaryMathArgs) -> Result<MathResultDto, AppError> {
        args.a
            .checked_mul(args.b)
            .map(|result| MathResultDto { result })
            .ok_or_else(|| overflow_error("*", args))
    }

    pub fn divide(&self, args: BinaryMathArgs) -> Result<MathResultDto, AppError> {
        if args.b == 0 {
            return Err(AppError::bad_request("division by zero".to_string()));
        }

        // checked_div still returns None for i64::MIN / -1.
        args.a
            .checked_div(args.b)
            .map(|result| MathResultDto { result })
            .ok_or_else(|| overflow_error("/", args))
    }
}

fn overflow_error(operator: &str, args: BinaryMathArgs) -> AppError {
    AppError::bad_request(format!(
        "integer overflow: {} {operator} {} does not fit in 64 bits",
        args.a, args.b
    ))
}
