//! Employee record source port.

use crate::domain::employee::RawEmployee;
use crate::error::Result;

/// Port for loading the employee list.
///
/// Implementations return the records in the order the backing store serves
/// them and leave field validation to the caller.
pub trait RecordSource {
    /// Load every employee record.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be retrieved or the payload
    /// does not have the expected envelope.
    fn fetch(&self) -> Result<Vec<RawEmployee>>;
}

impl<S: RecordSource + ?Sized> RecordSource for &S {
    fn fetch(&self) -> Result<Vec<RawEmployee>> {
        (**self).fetch()
    }
}

impl<S: RecordSource + ?Sized> RecordSource for Box<S> {
    fn fetch(&self) -> Result<Vec<RawEmployee>> {
        (**self).fetch()
    }
}
