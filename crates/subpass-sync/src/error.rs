use ash::vk;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncDependencyError {
    #[error("Access mask is empty, leave the memory dependency out instead")]
    EmptyAccessMask,
    #[error(
        "Access mask {0:?} contains non-write bits, the source side of a dependency can only make writes available"
    )]
    NonWriteAccess(vk::AccessFlags),
}

#[cfg(test)]
mod test {
    use static_assertions::assert_impl_all;

    use crate::{SubpassDependency, SubpassRef, SyncDependencyError, WriteAccess};

    #[test]
    fn assure_send_sync() {
        assert_impl_all!(SyncDependencyError: Send, Sync);
        assert_impl_all!(SubpassDependency: Send, Sync, Copy);
        assert_impl_all!(SubpassRef: Send, Sync, Copy);
        assert_impl_all!(WriteAccess: Send, Sync, Copy);
    }
}
