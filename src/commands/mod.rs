pub mod create;
pub mod rename;
