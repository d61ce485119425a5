pub mod exercise;

pub use exercise::{
    ErrorDetail, Exercise, ExerciseRequest, ExerciseResponse, Outcome, ERROR_CODE_INTERNAL,
    ERROR_CODE_INVALID_INPUT,
};
