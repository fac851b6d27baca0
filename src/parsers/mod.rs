pub mod santander;
pub mod traits;

pub mod prelude {
    pub use super::santander::prelude::*;
    pub use super::traits::Parser;
}
