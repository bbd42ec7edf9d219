//! `gridkit-nav` coordinates keyboard focus across independently navigable UI regions.
//!
//! Host components register a named [`region::FocusableRegion`] while they are attached and
//! unregister it on teardown. The [`coordinator::NavCoordinator`] owns the registry for that
//! window only: it never owns the underlying UI elements, it just invokes the callbacks a
//! region was registered with.
//!
//! The coordinator is an explicitly constructed service. Create one per application session
//! and pass it to the components that take part in arrow-key focus handoff; do not reach for
//! a global.

pub mod coordinator;
pub mod region;
pub mod row_nav;

pub use coordinator::NavCoordinator;
pub use region::FocusableRegion;
pub use region::RegionRef;
pub use row_nav::RowBindings;
pub use row_nav::RowNavAction;
