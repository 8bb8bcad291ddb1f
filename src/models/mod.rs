pub mod customer;
pub mod genre;
pub mod movie;

pub use customer::{Customer, CustomerResponse, GenreUpdateRequest};
pub use genre::{Genre, UnknownGenre};
pub use movie::Movie;
