//! Consistency checks between the parameter catalog and the routing tables.

mod validator;

use crate::error::CheckError;
use crate::types::Surface;
use validator::Validator;

/// Checks both surfaces. Collects every violation instead of stopping at the first.
pub fn check_tables() -> Result<(), CheckError> {
    let mut v = Validator::new();
    for surface in Surface::ALL {
        v.check_surface(surface);
    }
    v.finish()
}

pub fn check_surface(surface: Surface) -> Result<(), CheckError> {
    let mut v = Validator::new();
    v.check_surface(surface);
    v.finish()
}
