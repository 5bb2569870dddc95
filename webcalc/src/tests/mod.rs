
mod error;

mod greeting;
