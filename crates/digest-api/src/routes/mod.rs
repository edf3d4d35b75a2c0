pub mod health;
pub mod openapi;
pub mod pages;
pub mod summaries;
pub mod topic;
