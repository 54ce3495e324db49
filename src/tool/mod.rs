// ABOUTME: Tool module - defines tools, registry, and execution results.
// ABOUTME: Core abstraction for capabilities the model can invoke.

mod registry;
mod result;
mod traits;

pub use registry::*;
pub use result::*;
pub use traits::*;
