pub mod common;
pub mod config;
pub mod export;
pub mod languages;
pub mod list;
pub mod pick;
pub mod search;

pub use common::RunOptions;
pub use config::Config;
pub use export::Export;
pub use languages::Languages;
pub use list::List;
pub use pick::Pick;
pub use search::Search;
