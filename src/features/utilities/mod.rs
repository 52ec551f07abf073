pub mod dto;
pub mod handler;
pub mod math_service;
pub mod time_service;

pub use dto::{BinaryMathArgs, CurrentDatetimeDto, MathResultDto};
pub use handler::{
    handle_current_datetime, handle_math_add, handle_math_divide, handle_math_multiply,
    handle_math_subtract,
};
pub use math_service::MathService;
pub use time_service::DateTimeService;
