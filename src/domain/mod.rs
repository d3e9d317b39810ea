// Domain layer: value types, lexical nouns and the configuration port. No I/O.

pub mod model;
pub mod ports;
