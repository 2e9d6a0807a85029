use std::path::Path;

/// Where the synthesized audio will be written for one invocation.
///
/// Exactly one variant applies; the decision depends only on whether a local
/// folder was given and whether a complete S3 target was given:
///
/// | local folder | s3 target | plan         |
/// |--------------|-----------|--------------|
/// | yes          | no        | LocalOnly    |
/// | yes          | yes       | Both         |
/// | no           | yes       | CloudOnly    |
/// | no           | no        | DefaultLocal |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistencePlan {
    LocalOnly,
    CloudOnly,
    Both,
    /// No destination given at all; write to the configured default folder.
    DefaultLocal,
}

impl PersistencePlan {
    pub fn writes_local(&self) -> bool {
        matches!(
            self,
            PersistencePlan::LocalOnly | PersistencePlan::Both | PersistencePlan::DefaultLocal
        )
    }

    pub fn uploads_s3(&self) -> bool {
        matches!(self, PersistencePlan::CloudOnly | PersistencePlan::Both)
    }
}

/// Resolve the persistence plan from the two presence flags. Pure; performs
/// no I/O. Partial S3 parameter sets must be rejected before calling this
/// (see [`StoreOptions::s3_target`](crate::config::StoreOptions::s3_target)).
pub fn resolve(local_folder: Option<&Path>, s3_target: bool) -> PersistencePlan {
    match (local_folder.is_some(), s3_target) {
        (true, false) => PersistencePlan::LocalOnly,
        (true, true) => PersistencePlan::Both,
        (false, true) => PersistencePlan::CloudOnly,
        (false, false) => PersistencePlan::DefaultLocal,
    }
}
