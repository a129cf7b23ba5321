//! # Dependency descriptor
//!
//! A renderpass orders its subpasses through a graph of dependency edges. Each edge names the
//! producing and consuming pass, the pipeline stages on both sides, and optionally the memory
//! that has to be made available (source side) and visible (destination side) across the edge.
//!
//! Two kinds of edges are special:
//! - *external* dependencies, where one endpoint is work outside the renderpass (a previous or
//!   following renderpass, or host access). Vulkan encodes those with the reserved
//!   [SUBPASS_EXTERNAL](ash::vk::SUBPASS_EXTERNAL) index.
//! - *self* dependencies, where a subpass depends on itself. Those occur when a single subpass
//!   both writes and later reads the same attachment, for instance in an input attachment
//!   feedback loop, and has to serialize its own stages.
//!
//! The classification predicates on [SubpassDependency] expose exactly those cases. Note that a
//! self dependency is a refinement of an intra-subpass dependency, not a separate category:
//! [is_subpass_self_dependency](SubpassDependency::is_subpass_self_dependency) implies
//! [is_intra_subpass_sync](SubpassDependency::is_intra_subpass_sync). Barrier emission downstream
//! branches on those predicates in combination.

use ash::vk;

use crate::access::WriteAccess;

///Identifies one endpoint of a [SubpassDependency]: either a subpass of the renderpass being
/// described, or work outside of it.
///
/// Keeping the external case as its own variant (instead of overloading an integer with a magic
/// value) rules out any collision with a real index. The translation into Vulkan's unsigned
/// encoding happens in exactly one place, [to_vk](SubpassRef::to_vk).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubpassRef {
    ///Index of a subpass within the renderpass.
    Index(u32),
    ///Work before or after the renderpass.
    External,
}

impl SubpassRef {
    ///Raw signed encoding of [External](SubpassRef::External), as used by
    /// [from_raw](SubpassRef::from_raw) and [to_raw](SubpassRef::to_raw).
    pub const EXTERNAL_ID: i32 = -1;

    ///Builds a reference from a raw signed id where [EXTERNAL_ID](SubpassRef::EXTERNAL_ID) marks
    /// an external dependency and any non-negative value is a subpass index.
    ///
    /// Other negative values are out of contract. They are treated as external as well, since
    /// there is no subpass they could name.
    pub fn from_raw(raw: i32) -> Self {
        if raw < 0 {
            #[cfg(feature = "logging")]
            if raw != Self::EXTERNAL_ID {
                log::warn!("Treating out of contract subpass id {raw} as external");
            }
            SubpassRef::External
        } else {
            SubpassRef::Index(raw as u32)
        }
    }

    ///Returns the raw signed encoding, [EXTERNAL_ID](SubpassRef::EXTERNAL_ID) for the external
    /// case.
    pub fn to_raw(&self) -> i32 {
        match self {
            SubpassRef::Index(idx) => *idx as i32,
            SubpassRef::External => Self::EXTERNAL_ID,
        }
    }

    ///Translates into Vulkan's unsigned encoding, where
    /// [SUBPASS_EXTERNAL](ash::vk::SUBPASS_EXTERNAL) marks an external dependency.
    pub fn to_vk(&self) -> u32 {
        match self {
            SubpassRef::Index(idx) => *idx,
            SubpassRef::External => vk::SUBPASS_EXTERNAL,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, SubpassRef::External)
    }
}

impl From<u32> for SubpassRef {
    fn from(index: u32) -> Self {
        SubpassRef::Index(index)
    }
}

///One directed edge of a renderpass's subpass dependency graph.
///
/// When you receive such a descriptor in a callback it is usually pre-filled with the permissive
/// [new](SubpassDependency::new) defaults. Narrow the stages and access masks according to the
/// requirements of your particular application before the renderpass is finalized.
///
/// Plain value type: copyable, immutable after refinement, owns nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubpassDependency {
    src_pass: SubpassRef,
    dst_pass: SubpassRef,

    ///The (previous) stages that must have completed execution.
    pub src_stage: vk::PipelineStageFlags,

    ///The memory to be made available from the source stages. `None` requests no memory barrier,
    /// only execution ordering.
    pub src_access: Option<WriteAccess>,

    ///The (subsequent) stages that have to wait upon completion of the source stages.
    pub dst_stage: vk::PipelineStageFlags,

    ///The memory to be made visible before execution continues. This can be both read and write
    /// access, for "read after write" or "write after write" sync respectively. `None` requests
    /// no memory barrier.
    pub dst_access: Option<vk::AccessFlags>,
}

impl SubpassDependency {
    ///Creates a dependency of `src` onto `dst` with safe but unoptimized defaults: the whole
    /// pipeline of `src` ([TOP_OF_PIPE](vk::PipelineStageFlags::TOP_OF_PIPE)) orders before the
    /// whole pipeline of `dst` ([BOTTOM_OF_PIPE](vk::PipelineStageFlags::BOTTOM_OF_PIPE)), and no
    /// memory barrier is requested.
    pub fn new(src: impl Into<SubpassRef>, dst: impl Into<SubpassRef>) -> Self {
        SubpassDependency {
            src_pass: src.into(),
            dst_pass: dst.into(),
            src_stage: vk::PipelineStageFlags::TOP_OF_PIPE,
            src_access: None,
            dst_stage: vk::PipelineStageFlags::BOTTOM_OF_PIPE,
            dst_access: None,
        }
    }

    ///Creates a fully specified dependency. The source access, if any, is a [WriteAccess], since
    /// only writes produce memory effects that could be made available.
    pub fn with_sync(
        src: impl Into<SubpassRef>,
        dst: impl Into<SubpassRef>,
        src_stage: vk::PipelineStageFlags,
        src_access: Option<WriteAccess>,
        dst_stage: vk::PipelineStageFlags,
        dst_access: Option<vk::AccessFlags>,
    ) -> Self {
        SubpassDependency {
            src_pass: src.into(),
            dst_pass: dst.into(),
            src_stage,
            src_access,
            dst_stage,
            dst_access,
        }
    }

    ///True if this dependency guards entry into the renderpass from outside work.
    pub fn is_external_pre_sync(&self) -> bool {
        self.src_pass.is_external()
    }

    ///True if this dependency guards exit from the renderpass to outside work.
    pub fn is_external_post_sync(&self) -> bool {
        self.dst_pass.is_external()
    }

    ///True if both endpoints are subpasses of this renderpass (including a subpass and itself).
    pub fn is_intra_subpass_sync(&self) -> bool {
        !self.is_external_pre_sync() && !self.is_external_post_sync()
    }

    ///True if this is a dependency of a subpass onto itself.
    pub fn is_subpass_self_dependency(&self) -> bool {
        self.is_intra_subpass_sync() && self.src_pass == self.dst_pass
    }

    pub fn source_subpass(&self) -> SubpassRef {
        self.src_pass
    }

    pub fn destination_subpass(&self) -> SubpassRef {
        self.dst_pass
    }

    ///The source endpoint in Vulkan's unsigned encoding, ready for the native dependency record.
    pub fn source_vk_subpass(&self) -> u32 {
        self.src_pass.to_vk()
    }

    ///The destination endpoint in Vulkan's unsigned encoding.
    pub fn destination_vk_subpass(&self) -> u32 {
        self.dst_pass.to_vk()
    }

    ///Emits the native dependency record for this edge. Absent access masks translate to empty
    /// masks, i.e. no memory barrier.
    pub fn to_vk(&self) -> vk::SubpassDependency {
        vk::SubpassDependency::default()
            .src_subpass(self.source_vk_subpass())
            .dst_subpass(self.destination_vk_subpass())
            .src_stage_mask(self.src_stage)
            .src_access_mask(self.src_access.map(|a| a.flags()).unwrap_or_default())
            .dst_stage_mask(self.dst_stage)
            .dst_access_mask(self.dst_access.unwrap_or_default())
    }
}
