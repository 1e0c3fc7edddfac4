//! Help content editing core.
//!
//! - `resolver`: coordinate lookups producing list entries and editable items
//! - `mutation`: copy-on-write add / reorder / update / remove
//! - `projection`: picker list view model and change detection
//! - `deferred`: delayed editor apply, superseded by newer requests
//! - `session`: the edit session controller tying the above together

mod deferred;
mod mutation;
mod projection;
mod resolver;
mod session;

pub use deferred::*;
pub use mutation::*;
pub use projection::*;
pub use resolver::*;
pub use session::*;
