pub mod app;
pub mod config;
pub mod error;
pub mod interpolate;
pub mod legend;
pub mod models;
pub mod reader;
pub mod registry;
pub mod utils;

pub use app::LegendApp;
pub use config::{Cli, Command, Config, LegendFormat};
pub use error::ScaleError;
pub use interpolate::{builtin_scales, interpolate};
pub use legend::Legend;
pub use models::{
    scale::ColorScale,
    style::{ColorStop, Rgb},
};
pub use registry::{ScaleRegistry, ScaleSource};
