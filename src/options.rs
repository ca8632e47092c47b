use rust_decimal::Decimal;
use typed_builder::TypedBuilder;

/// Settings of an analysis run.
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
pub struct AnalysisOptions {
    /// Amounts and quantities closer than this are treated as equal.
    #[builder(default = Decimal::new(1, 3))]
    pub tolerance: Decimal,

    /// Number of account levels used when naming accounts in reports; `None` for full names.
    #[builder(default = Some(3))]
    pub name_depth: Option<usize>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions::builder().build()
    }
}
