pub mod storage;
pub mod product {
    pub mod entity;
    pub mod repository;
}
