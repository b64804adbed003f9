// Presentation layer - Controller and rendering boundary
pub mod controller;
pub mod renderer;
