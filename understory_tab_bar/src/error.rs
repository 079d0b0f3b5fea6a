// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::coordinator::CoordinatorId;
use crate::registry::SelectorId;

/// Errors reported by [`TabBar`](crate::TabBar) operations.
///
/// None of these are fatal: the bar is left unchanged and a warning is logged
/// where the problem is detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TabBarError {
    /// The selector id does not refer to a live selector.
    #[error("selector {0:?} does not exist")]
    UnknownSelector(SelectorId),
    /// The coordinator id does not refer to a coordinator of this bar.
    #[error("coordinator {0:?} does not exist")]
    UnknownCoordinator(CoordinatorId),
    /// A positional request fell outside the coordinator's selector list.
    #[error("index {index} is out of range of {len} selectors")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of selectors in the group.
        len: usize,
    },
    /// The selector is not part of the coordinator's group.
    #[error("selector {selector:?} is not managed by coordinator {coordinator:?}")]
    NotInGroup {
        /// Selector that was requested.
        selector: SelectorId,
        /// Coordinator that received the request.
        coordinator: CoordinatorId,
    },
    /// The selector is locked and cannot become active.
    #[error("selector {0:?} is locked")]
    Locked(SelectorId),
}
