//! Business logic shared by the GraphQL resolvers and REST handlers.

pub mod instagram;
pub mod users;
