use ash::vk;

use crate::error::SyncDependencyError;

///An access mask that is guaranteed to only contain write accesses.
///
/// The source side of a [SubpassDependency](crate::SubpassDependency) declares which memory is
/// made *available* across the dependency. Reads produce no memory effects, so a read access on
/// that side would be meaningless. This type makes supplying one a compile time error instead of
/// an unchecked precondition.
///
/// Use the associated constants for the common case and [TryFrom] for masks assembled at runtime.
/// Write accesses can be combined with the `|` operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WriteAccess(vk::AccessFlags);

impl WriteAccess {
    pub const SHADER_WRITE: Self = WriteAccess(vk::AccessFlags::SHADER_WRITE);
    pub const COLOR_ATTACHMENT_WRITE: Self = WriteAccess(vk::AccessFlags::COLOR_ATTACHMENT_WRITE);
    pub const DEPTH_STENCIL_ATTACHMENT_WRITE: Self =
        WriteAccess(vk::AccessFlags::DEPTH_STENCIL_ATTACHMENT_WRITE);
    pub const TRANSFER_WRITE: Self = WriteAccess(vk::AccessFlags::TRANSFER_WRITE);
    pub const HOST_WRITE: Self = WriteAccess(vk::AccessFlags::HOST_WRITE);
    pub const MEMORY_WRITE: Self = WriteAccess(vk::AccessFlags::MEMORY_WRITE);

    ///All access flags that denote a write.
    pub const WRITE_MASK: vk::AccessFlags = vk::AccessFlags::from_raw(
        vk::AccessFlags::SHADER_WRITE.as_raw()
            | vk::AccessFlags::COLOR_ATTACHMENT_WRITE.as_raw()
            | vk::AccessFlags::DEPTH_STENCIL_ATTACHMENT_WRITE.as_raw()
            | vk::AccessFlags::TRANSFER_WRITE.as_raw()
            | vk::AccessFlags::HOST_WRITE.as_raw()
            | vk::AccessFlags::MEMORY_WRITE.as_raw(),
    );

    ///Returns the wrapped access mask.
    pub const fn flags(&self) -> vk::AccessFlags {
        self.0
    }
}

impl From<WriteAccess> for vk::AccessFlags {
    fn from(access: WriteAccess) -> Self {
        access.0
    }
}

impl TryFrom<vk::AccessFlags> for WriteAccess {
    type Error = SyncDependencyError;

    ///Checks that `flags` is a non-empty mask of write accesses. An empty mask is rejected as
    /// well, "no memory dependency" is expressed by leaving the optional access out entirely.
    fn try_from(flags: vk::AccessFlags) -> Result<Self, Self::Error> {
        if flags.is_empty() {
            return Err(SyncDependencyError::EmptyAccessMask);
        }

        if !Self::WRITE_MASK.contains(flags) {
            return Err(SyncDependencyError::NonWriteAccess(flags));
        }

        Ok(WriteAccess(flags))
    }
}

impl std::ops::BitOr for WriteAccess {
    type Output = WriteAccess;
    fn bitor(self, rhs: WriteAccess) -> WriteAccess {
        WriteAccess(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for WriteAccess {
    fn bitor_assign(&mut self, rhs: WriteAccess) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
mod test {
    use ash::vk;

    use crate::{SyncDependencyError, WriteAccess};

    #[test]
    fn accepts_write_masks() {
        let combined = vk::AccessFlags::COLOR_ATTACHMENT_WRITE | vk::AccessFlags::TRANSFER_WRITE;
        let access = WriteAccess::try_from(combined).unwrap();
        assert_eq!(access.flags(), combined);
    }

    #[test]
    fn rejects_read_bits() {
        let mixed = vk::AccessFlags::SHADER_WRITE | vk::AccessFlags::SHADER_READ;
        assert!(matches!(
            WriteAccess::try_from(mixed),
            Err(SyncDependencyError::NonWriteAccess(flags)) if flags == mixed
        ));

        assert!(matches!(
            WriteAccess::try_from(vk::AccessFlags::COLOR_ATTACHMENT_READ),
            Err(SyncDependencyError::NonWriteAccess(_))
        ));
    }

    #[test]
    fn rejects_empty_mask() {
        assert!(matches!(
            WriteAccess::try_from(vk::AccessFlags::empty()),
            Err(SyncDependencyError::EmptyAccessMask)
        ));
    }

    #[test]
    fn combining_stays_write_only() {
        let combined = WriteAccess::SHADER_WRITE | WriteAccess::MEMORY_WRITE;
        assert!(WriteAccess::WRITE_MASK.contains(combined.flags()));

        let mut access = WriteAccess::COLOR_ATTACHMENT_WRITE;
        access |= WriteAccess::DEPTH_STENCIL_ATTACHMENT_WRITE;
        assert_eq!(
            access.flags(),
            vk::AccessFlags::COLOR_ATTACHMENT_WRITE
                | vk::AccessFlags::DEPTH_STENCIL_ATTACHMENT_WRITE
        );
    }
}
