mod open;
mod process;
mod window;

pub use open::*;
pub use process::*;
pub use window::*;
