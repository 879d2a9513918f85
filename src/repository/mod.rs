pub mod json_cost_repository_impl;
