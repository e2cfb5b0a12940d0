pub mod cli;
pub mod commands;
pub mod compare;
pub mod config;
pub mod error;
pub mod render;
pub mod report;

pub use compare::{
    BoundingBox, DiffEvent, DiffReport, DifferenceMask, compute_difference, diff_files,
    diff_images,
};
pub use error::DiffError;
