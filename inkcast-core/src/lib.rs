pub mod color;
pub mod state;
pub mod stroke;
pub mod units;
pub mod util;
