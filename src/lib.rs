pub mod shared {
    pub mod infrastructure {
        pub mod data_store;
    }
}

pub mod modules {
    pub mod auth {
        pub mod core {
            pub mod request_context;
        }
        pub mod context_provider;
        pub mod adapters {
            pub mod static_tokens;
        }
    }
    pub mod query_engine {
        pub mod engine;
        pub mod graphql;
    }
}

pub mod shell;
