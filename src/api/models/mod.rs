pub mod addandearn;
pub mod bank_scraper;
pub mod common;

pub use addandearn::*;
pub use bank_scraper::*;
pub use common::*;
