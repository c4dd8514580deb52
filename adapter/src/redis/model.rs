use shared::error::{AppError, AppResult};

pub trait RedisKey {
    type Value: RedisValue + TryFrom<String, Error = AppError>;
    fn inner(&self) -> String;
}

pub trait RedisValue {
    fn inner(&self) -> String;
}

pub(crate) fn parse_stored_id(value: &str) -> AppResult<i32> {
    value
        .parse()
        .map_err(|_| AppError::ConversionEntityError(format!("stored id {value} is not numeric")))
}
