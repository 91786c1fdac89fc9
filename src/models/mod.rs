pub mod logbook;

pub use logbook::{Logbook, Record};
