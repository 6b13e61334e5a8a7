use crate::GameError;

pub trait Validate {
    /// Fails with `GameError::InvalidConfiguration` describing the first bad value.
    fn validate(&self) -> Result<(), GameError>;
}
