pub mod convert;
pub mod quote;
pub mod setup;
pub mod ui;
