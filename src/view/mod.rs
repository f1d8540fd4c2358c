pub mod index;
pub mod review;
pub mod rounds;
