pub mod geometry;
pub mod net;
