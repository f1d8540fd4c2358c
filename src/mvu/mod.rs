pub mod decode;
pub mod runtime;
pub mod workflow;
