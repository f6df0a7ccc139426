//! HTTP/GraphQL backend for Glam: user accounts plus Instagram photo
//! collection backed by the headless scraper in `glam-scraper`.

pub mod db;
pub mod graphql;
pub mod jwt;
pub mod password;
pub mod routes;
pub mod services;
