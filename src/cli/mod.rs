mod migrate;
mod server;

pub use migrate::*;
pub use server::*;
