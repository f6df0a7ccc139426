use async_graphql::ErrorExtensions;

/// Create an UNAUTHENTICATED GraphQL error.
pub fn unauthorized(msg: impl std::fmt::Display) -> async_graphql::Error {
    async_graphql::Error::new(msg.to_string()).extend_with(|_, e| {
        e.set("code", "UNAUTHENTICATED");
    })
}

/// Create a BAD_REQUEST GraphQL error.
pub fn bad_request(msg: impl std::fmt::Display) -> async_graphql::Error {
    async_graphql::Error::new(msg.to_string()).extend_with(|_, e| {
        e.set("code", "BAD_REQUEST");
    })
}

/// Create a BAD_REQUEST GraphQL error tied to one input field.
pub fn bad_request_field(field: &'static str, msg: impl std::fmt::Display) -> async_graphql::Error {
    async_graphql::Error::new(msg.to_string()).extend_with(|_, e| {
        e.set("code", "BAD_REQUEST");
        e.set("field", field);
    })
}

/// Create a NOT_FOUND GraphQL error.
pub fn not_found(msg: impl std::fmt::Display) -> async_graphql::Error {
    async_graphql::Error::new(msg.to_string()).extend_with(|_, e| {
        e.set("code", "NOT_FOUND");
    })
}

/// Create an INTERNAL GraphQL error (hides internal details).
pub fn internal(msg: impl std::fmt::Display) -> async_graphql::Error {
    tracing::error!("internal error: {msg}");
    async_graphql::Error::new("internal error").extend_with(|_, e| {
        e.set("code", "INTERNAL");
    })
}
