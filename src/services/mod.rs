pub mod customer;
pub mod movie_client;

pub use customer::CustomerService;
pub use movie_client::{HttpMovieClient, MovieClient};
