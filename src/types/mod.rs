pub mod date_window;
pub mod field;
pub mod observation;
pub mod result_table;
pub mod summary;
