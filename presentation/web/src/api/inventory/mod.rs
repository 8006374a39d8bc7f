pub mod dto;
pub mod error_mapper;
pub mod interaction;
pub mod routes;
