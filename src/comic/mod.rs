pub mod builder;
pub mod model;
pub mod panels;
pub mod store;
pub mod video;

pub use builder::ComicBuilder;
pub use model::Comic;
pub use store::{AddMode, ComicStore};
