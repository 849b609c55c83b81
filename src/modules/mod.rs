pub mod books;
pub mod tmdb;
