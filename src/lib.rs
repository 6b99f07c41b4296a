mod term;
mod poly;

pub use poly::Polynomial;
