pub mod analysis;
pub mod instance_generators;
