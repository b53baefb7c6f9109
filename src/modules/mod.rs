pub mod user {
    pub mod schema;
    pub mod model;
    pub mod repository;
    pub mod repository_mem;
    pub mod handle;
    pub mod service;
    pub mod route;
}

pub mod film {
    pub mod schema;
    pub mod model;
    pub mod repository;
    pub mod repository_mem;
    pub mod ranking;
    pub mod handle;
    pub mod service;
    pub mod route;
}

pub mod friend {
    pub mod model;
    pub mod repository;
    pub mod repository_mem;
    pub mod handle;
    pub mod service;
    pub mod route;
}
