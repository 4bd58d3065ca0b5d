pub mod chart;
pub mod forecast;

pub use chart::*;
pub use forecast::*;
