pub mod macros;
mod market;
mod research;
