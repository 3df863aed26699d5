pub mod activities_repo;
pub mod activity_store;
pub mod seed;
