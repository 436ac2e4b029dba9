pub mod card;
pub mod format;
pub mod histogram;
pub mod listing;
pub mod price;
pub mod report;
pub mod summary;
pub mod value;

pub use report::build_report;
