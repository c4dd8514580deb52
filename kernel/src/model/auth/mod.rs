pub mod event;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessToken(pub String);
