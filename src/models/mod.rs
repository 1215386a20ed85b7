//! Scheduling domain models.
//!
//! Read-only views of the host environment's data: tasks carry an
//! identifier and an instruction length, resources carry a processing
//! speed and a cost rate. The [`ExecutionEnvironment`] trait is the
//! capability contract for host-supplied duration and failure-rate
//! functions. All values are immutable for the duration of a search run.
//!
//! # Domain Mappings
//!
//! | fpa-schedule | Cloud | Manufacturing |
//! |--------------|-------|---------------|
//! | Task | Cloudlet | Job |
//! | Resource | VM | Machine |
//! | length | instruction count (MI) | processing time |
//! | speed | MIPS | work rate |

mod environment;
mod resource;
mod task;

pub use environment::{ExecutionEnvironment, SimpleEnvironment};
pub use resource::Resource;
pub use task::Task;
