use super::Error;

/// Error when the process-wide converter registry is installed twice, or
/// after it has already been read.
#[derive(Debug)]
pub(super) struct RegistryInstalled;

impl std::error::Error for RegistryInstalled {}

impl core::fmt::Display for RegistryInstalled {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("type converter registry is already installed")
    }
}

impl Error {
    pub fn registry_installed() -> Error {
        Error::from(super::ErrorKind::RegistryInstalled(RegistryInstalled))
    }

    pub fn is_registry_installed(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::RegistryInstalled(_))
    }
}
