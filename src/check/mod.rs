pub mod checker;
pub mod format;
pub mod outcome;
