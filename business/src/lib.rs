pub mod application {
    pub mod inventory {
        pub mod dispatcher;
        pub mod store;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod inventory {
        pub mod errors;
        pub mod events;
        pub mod services;
        pub mod session;
        pub mod view;
    }
    pub mod product {
        pub mod errors;
        pub mod form;
        pub mod model;
        pub mod repository;
        pub mod search;
        pub mod value_objects;
    }
}
