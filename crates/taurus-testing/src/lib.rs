//! Testing utilities and harness for Taurus

pub mod fakes;
pub mod robot;

pub use fakes::*;
pub use robot::*;

pub mod prelude {
    pub use crate::fakes::*;
    pub use crate::robot::*;
}
