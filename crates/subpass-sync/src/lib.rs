//! # Subpass-Sync
//!
//! Models explicit synchronization dependencies between the subpasses of a Vulkan renderpass.
//! Each [SubpassDependency](dependency::SubpassDependency) is one directed edge of the subpass
//! dependency graph: "these stages of the source pass must finish and make their writes available
//! before those stages of the destination pass may begin and see them".
//!
//! # Usage
//!
//! A renderpass builder creates one descriptor per declared edge, usually via the permissive
//! [new](dependency::SubpassDependency::new) defaults, and hands them to application callbacks for
//! refinement. Change stages and access masks according to the requirements of your particular
//! application! Afterwards the builder reads the classification predicates to decide how to emit
//! native dependency records, and [to_vk](dependency::SubpassDependency::to_vk) (or the
//! `*_vk_subpass` accessors) to obtain wire-ready values.
//!
//! Following the usual convention, structures that are not sensitive to lifetime requirements are
//! not wrapped: pipeline stages and access masks are plain [ash] flag types. The only constraint
//! this crate adds on top of them is [WriteAccess](access::WriteAccess), since the source side of
//! a dependency can only ever make *writes* available.
#![deny(warnings)]

pub use ash;

///Access masks restricted to write accesses, used on the source side of a dependency.
pub mod access;

///The dependency descriptor itself, plus the [SubpassRef](dependency::SubpassRef) identifier type.
pub mod dependency;

mod error;
pub use error::SyncDependencyError;

pub use access::WriteAccess;
pub use dependency::{SubpassDependency, SubpassRef};
