// Module layout (Clean Architecture style)
// - bootstrap: configuration and startup wiring
// - infrastructure: Postgres gateway
// - presentation: HTTP handlers and routing
// - application: gateway port and user use cases
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

#[cfg(test)]
pub(crate) mod test_support;
