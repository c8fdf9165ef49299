mod component;
mod edit_modal;
mod error;
mod graph;
mod render;
mod state;
mod toolbar;
mod types;
mod viewport;

pub use component::PhilosophicalNetworkGraph;
