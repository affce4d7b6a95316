//! Route paths shared by guards, links and the router table.

pub const ROOT: &str = "/";
pub const LOGIN: &str = "/login";
pub const DASHBOARD: &str = "/dashboard";
