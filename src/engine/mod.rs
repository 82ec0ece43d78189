// Engine modules

pub mod input;
