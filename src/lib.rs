pub mod assets;
pub mod constants;
pub mod deck;
pub mod dispatcher;
pub mod handles;
pub mod narrative;
pub mod renderers;
pub mod scroll;
pub mod surface;
pub mod text;
pub mod texture_loader;
