//! Implements the base structures for a material point simulation

mod constants;
mod error;
mod file_io;
mod interpolation;
mod loading;
mod logging;
mod parameters;
mod voigt;
pub use crate::base::constants::*;
pub use crate::base::error::*;
pub(crate) use crate::base::file_io::*;
pub use crate::base::interpolation::*;
pub use crate::base::loading::*;
pub use crate::base::logging::*;
pub use crate::base::parameters::*;
pub use crate::base::voigt::*;
