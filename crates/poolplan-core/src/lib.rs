pub mod budget;
pub mod error;
pub mod export;
pub mod io;
pub mod maintenance;
pub mod materials;
pub mod paths;
pub mod plan;
pub mod planner;
pub mod products;
pub mod recommend;
pub mod roi;
pub mod safety;
pub mod store;
pub mod timeline;
pub mod types;

pub use error::{PlanError, Result};
