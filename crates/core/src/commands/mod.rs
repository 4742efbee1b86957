mod list_instances;
mod list_snapshots;
mod list_volumes;
mod snapshot;
mod start;
mod stop;

pub use list_instances::list_instances;
pub use list_snapshots::list_snapshots;
pub use list_volumes::list_volumes;
pub use snapshot::create_snapshots;
pub use start::start_instances;
pub use stop::stop_instances;
