pub mod crates;
pub mod run;
pub mod testing;
