//! Implements the BCJ constitutive integrator and companion flow stress models

mod bcj;
mod johnson_cook;
mod loading_path;
mod reference_data;
mod settings;
mod state_history;
mod temperature_laws;
mod testing;
pub use crate::material::bcj::*;
pub use crate::material::johnson_cook::*;
pub use crate::material::loading_path::*;
pub use crate::material::reference_data::*;
pub use crate::material::settings::*;
pub use crate::material::state_history::*;
pub use crate::material::temperature_laws::*;
#[allow(unused_imports)]
pub(crate) use crate::material::testing::*;
