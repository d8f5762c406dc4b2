use crate::utils::error::Result;

/// Byte-level access to the files named by a [`ConfigProvider`].
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn data_dir(&self) -> &str;
    fn database_file(&self) -> &str;
    fn export_file(&self) -> &str;
}
