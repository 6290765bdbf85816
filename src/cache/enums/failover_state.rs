#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailoverState {
    PrimaryActive,
    FallbackActive,
}
