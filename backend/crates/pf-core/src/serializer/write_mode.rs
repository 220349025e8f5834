/// How strictly a client document is checked against the field declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// POST: every required field must be present
    Create,
    /// PUT: every required field must be present
    Update,
    /// PATCH: missing fields are left unchanged
    PartialUpdate,
}

impl WriteMode {
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::PartialUpdate)
    }
}
