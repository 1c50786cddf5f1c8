pub mod check;
pub mod config;
pub mod fields;
pub mod plan;
pub mod routes;
pub mod run;
