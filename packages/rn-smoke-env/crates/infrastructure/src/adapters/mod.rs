pub mod android;
pub mod expo_client;
pub mod fs;
pub mod http;
pub mod ios;
pub mod process;

#[cfg(test)]
pub(crate) mod testing;
