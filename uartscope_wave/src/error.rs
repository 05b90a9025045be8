use thiserror::Error;

pub type UartResult<T> = Result<T, UartError>;

#[derive(Debug, Error, PartialEq)]
pub enum UartError {
    #[error("data must be an 8-bit unsigned value, got {}", _0)]
    Range(i64),
}
