//! Command implementations.

pub mod harvest;
pub mod pos_frequency;
pub mod process;
pub mod validate;

pub use self::harvest::execute_harvest;
pub use self::pos_frequency::execute_pos_frequency;
pub use self::process::execute_process;
pub use self::validate::execute_validate;
