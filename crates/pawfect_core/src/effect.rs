#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Some records were left out of the last load.
    ReportSkipped(Vec<crate::InvalidRecord>),
    /// The provider failed; the previous catalog is still shown.
    ShowLoadError(crate::ProviderError),
}
