pub mod error;
pub mod lattice;
pub mod math;
pub mod mesher;
pub mod solid;

pub use error::{Result, SolidifyError};
pub use mesher::{build_model, MeshParams, Model, ModelBuilder};
pub use solid::Solid;
