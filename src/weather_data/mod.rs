pub mod cleaner;
pub mod error;
pub mod fetcher;
pub mod fields;
pub mod request;
