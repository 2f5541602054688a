pub mod plot;
#[cfg(feature = "ui")]
pub mod ui;
