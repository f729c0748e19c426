//! Head metadata synchronizer.
//!
//! [`mount`] writes a head plan into a document head through a [`HeadHost`]
//! and returns the [`MountedHead`] that owns every node it created.
//! [`MountedHead::unmount`] (or dropping the handle) detaches exactly those
//! nodes. Mount and unmount are synchronous; the hosting page guarantees they
//! alternate.

use tracing::{debug, warn};

use crate::error::HeadError;
use crate::seo::HeadElement;

/// A document head that can create, append and detach elements.
pub trait HeadHost {
    /// Handle to a created element.
    type Node;

    /// Create a detached element for `element`, with its attributes and text.
    fn create(&self, element: &HeadElement<'_>) -> Result<Self::Node, HeadError>;

    /// Append `node` as the last child of the head.
    fn append(&self, node: &Self::Node) -> Result<(), HeadError>;

    /// Detach `node` from its parent. Returns `false` if it had no parent.
    fn detach(&self, node: &Self::Node) -> bool;
}

impl<H: HeadHost + ?Sized> HeadHost for &H {
    type Node = H::Node;

    fn create(&self, element: &HeadElement<'_>) -> Result<Self::Node, HeadError> {
        (**self).create(element)
    }

    fn append(&self, node: &Self::Node) -> Result<(), HeadError> {
        (**self).append(node)
    }

    fn detach(&self, node: &Self::Node) -> bool {
        (**self).detach(node)
    }
}

/// The head elements owned by one mount cycle, in creation order.
pub struct MountedHead<H: HeadHost> {
    host: H,
    nodes: Vec<H::Node>,
}

/// Create and append every element of `plan`, in order.
///
/// On failure the elements appended so far are detached again before the
/// error is returned.
pub fn mount<H: HeadHost>(host: H, plan: &[HeadElement<'_>]) -> Result<MountedHead<H>, HeadError> {
    let mut mounted = MountedHead {
        host,
        nodes: Vec::with_capacity(plan.len()),
    };

    for element in plan {
        let node = mounted.host.create(element)?;
        mounted.host.append(&node)?;
        mounted.nodes.push(node);
    }

    debug!(elements = mounted.nodes.len(), "head elements mounted");
    Ok(mounted)
}

impl<H: HeadHost> MountedHead<H> {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[H::Node] {
        &self.nodes
    }

    /// Detach every owned node. Nodes already detached elsewhere are skipped.
    ///
    /// Returns the number of nodes this call actually detached.
    pub fn unmount(mut self) -> usize {
        self.release()
    }

    fn release(&mut self) -> usize {
        let owned = self.nodes.len();
        let detached = self
            .nodes
            .drain(..)
            .filter(|node| self.host.detach(node))
            .count();
        if owned > 0 {
            debug!(owned, detached, "head elements unmounted");
        }
        if detached < owned {
            warn!(
                missing = owned - detached,
                "head elements were already detached"
            );
        }
        detached
    }
}

impl<H: HeadHost> Drop for MountedHead<H> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<H: HeadHost> std::fmt::Debug for MountedHead<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountedHead")
            .field("nodes", &self.nodes.len())
            .finish()
    }
}
