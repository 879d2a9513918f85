pub mod cost_repository;
