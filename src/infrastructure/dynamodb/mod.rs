pub mod data_repo;
