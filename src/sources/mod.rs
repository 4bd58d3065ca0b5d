pub mod file;

pub use file::{load_candles, parse_candles};
