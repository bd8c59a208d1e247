pub mod error;
pub mod report;
pub mod rule;
pub mod verb;
pub mod words;

pub use error::*;
pub use report::*;
pub use rule::*;
pub use verb::*;
pub use words::*;
