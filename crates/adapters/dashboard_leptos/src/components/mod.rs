mod add_device;
mod device_trees;
mod server_toggle;

pub use add_device::AddDevice;
pub use device_trees::DeviceTrees;
pub use server_toggle::ServerToggleButton;
