pub mod platform;

pub use platform::HostPlatform;
