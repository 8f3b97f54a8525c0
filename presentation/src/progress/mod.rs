//! Progress reporting while question sources load

pub mod reporter;
