pub mod domain;

mod macros;
