pub mod agent;
pub mod connect_four;
pub mod console;
pub mod session;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;
    }
}

pub mod prelude {
    pub use super::agent::*;
    pub use super::connect_four::prelude::*;
    pub use super::console::*;
    pub use super::session::*;
    pub use super::utils::prelude::*;
}
