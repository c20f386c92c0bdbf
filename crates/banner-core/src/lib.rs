pub mod ambient;
pub mod bounce;
pub mod config;
pub mod constants;
pub mod driver;
pub mod emblem;
pub mod geometry;
pub mod particles;
pub mod scene;

pub use ambient::*;
pub use bounce::*;
pub use config::*;
pub use driver::*;
pub use emblem::*;
pub use geometry::*;
pub use particles::*;
pub use scene::*;
