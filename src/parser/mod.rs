mod combinators;
mod grammar;
mod lexemes;
mod locations;

pub use grammar::parse;
