pub mod error;
pub mod models;
pub mod ports;
pub mod summary;

#[cfg(test)]
pub(crate) mod test_helpers;
