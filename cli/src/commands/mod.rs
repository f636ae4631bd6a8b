pub mod common;
pub mod dfs;
pub mod paths;
