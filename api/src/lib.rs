pub mod cors;
pub mod middleware;
pub mod response;
pub mod routes;
