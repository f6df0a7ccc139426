//! User-facing message catalog.
//!
//! Every string an API consumer can see lives here, so services and
//! resolvers never hand-roll copy. The wording is product copy and is
//! kept verbatim even where it over-promises (PASSWORD_ERROR mentions a
//! special character the rule does not require).

pub const USER_CREATED: &str = "User was created";
pub const USER_EXISTS_EMAIL: &str = "User with this email already exists";
pub const USER_NOT_EXISTS: &str = "User doesn't exist";
pub const EMAIL_TAKEN: &str = "Email already exists";
pub const INVALID_EMAIL: &str = "Invalid email address";
pub const INVALID_TOKEN: &str = "Invalid JWT";
pub const WRONG_TOKEN: &str = "Wrong JWT type";
pub const WRONG_TOKEN_HEADER: &str = "Wrong JWT header";
pub const INCORRECT_PASSWORD: &str = "Incorrect password";
pub const AUTH_NEEDED: &str = "You need to be logged";
pub const PASSWORD_CHANGED: &str = "Password changed successfully";
pub const PASSWORD_REUSED: &str = "You cannot change your password to an existing one.";
pub const PASSWORD_ERROR: &str = "Invalid password format. Your password must be at least 8 \
     characters long and include at least one uppercase letter, one lowercase letter, one \
     number, and one special character.";
pub const LOGIN_FAILED: &str = "Incorrect username or password";

pub fn user_deleted(email: &str) -> String {
    format!("User was deleted: {email}")
}

pub fn account_not_found(username: &str) -> String {
    format!("The Instagram account {username} does not exist.")
}

pub fn private_account(username: &str) -> String {
    format!("The Instagram account {username} is private.")
}

pub fn extraction_error(username: &str) -> String {
    format!("Error occurred while extracting photos for user {username}")
}
