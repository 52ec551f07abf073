use crate::core::error::AppError;
use crate::features::utilities::dto::{BinaryMathArgs, CurrentDatetimeDto, MathResultDto};
use crate::features::utilities::{DateTimeService, MathService};

pub fn handle_math_add(
    service: &MathService,
    args: BinaryMathArgs,
) -> Result<MathResultDto, AppError> {
    service.add(args)
}

pub fn handle_math_subtract(
    service: &MathService,
    args: BinaryMathArgs,
) -> Result<MathResultDto, AppError> {
    service.subtract(args)
}

pub fn handle_math_multiply(
    service: &MathService,
    args: BinaryMathArgs,
) -> Result<MathResultDto, AppError> {
    service.multiply(args)
}

pub fn handle_math_divide(
    service: &MathService,
    args: BinaryMathArgs,
) -> Result<MathResultDto, AppError> {
    service.divide(args)
}

pub fn handle_current_datetime(service: &DateTimeService) -> CurrentDatetimeDto {
    service.current_datetime()
}
