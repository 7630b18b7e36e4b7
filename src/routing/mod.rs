//! Path search and route synthesis.

pub mod astar;
pub mod synthesis;

pub use astar::{find_path, path_distance_m};
pub use synthesis::{alternatives_from_distinct_graphs, generate_route_candidates, plan_graph};
