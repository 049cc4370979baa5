/// Contact record and property value types.
pub mod contact;
/// Typed outcomes for update, fetch and batch operations.
pub mod outcome;
/// Response body parsing helpers.
pub(crate) mod parse;
/// HTTP client for the contacts Web API.
pub mod serviceclient;
