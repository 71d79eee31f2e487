// Composition root for the API server.
//
// Responsibilities
// - Read config from environment.
// - Wire the query engine, context provider and data store into the HTTP front.
// - Sequence start-up so the listener opens only when everything behind it is ready.

pub mod body;
pub mod config;
pub mod graphql;
pub mod http;
pub mod startup;
pub mod state;
pub mod telemetry;
