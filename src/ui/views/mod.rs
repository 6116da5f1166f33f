pub mod binaries;
pub mod uninstall;
