pub mod app;
mod table;
