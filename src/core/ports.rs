pub mod journal;
#[cfg(test)]
pub mod memory;
pub mod repository;
