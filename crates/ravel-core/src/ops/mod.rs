mod chunks;
mod dot;
mod flatten;
mod map;
mod skip;
mod step_by;
mod transpose;
mod transpose4d;

pub use chunks::*;
pub use dot::*;
pub use flatten::*;
pub use map::*;
pub use skip::*;
pub use step_by::*;
pub use transpose::*;
pub use transpose4d::*;
