pub mod catalogue;
pub mod payload;
pub mod round;
pub mod selection;
pub mod workflow;

pub use catalogue::*;
pub use payload::*;
pub use round::*;
pub use selection::*;
pub use workflow::*;
