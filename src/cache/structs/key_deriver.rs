#[derive(Debug, Clone, Default)]
pub struct KeyDeriver {
    pub(crate) prefix: String,
}
