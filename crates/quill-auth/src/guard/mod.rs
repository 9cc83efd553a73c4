//! Ownership guard.
//!
//! Pure decision functions for acting on owned resources. The guard never
//! mutates state and never performs the mutation itself; it only yields a
//! decision, and callers must handle every outcome explicitly.
//!
//! `NotFound` and `Forbidden` are distinct here for testability, but callers
//! must present them identically (no existence disclosure).

use quill_entity::post::PostOwnership;

use crate::identity::Identity;

/// Outcome of an ownership check for a mutating operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The caller is not authenticated at all.
    Unauthenticated,
    /// The resource does not exist.
    NotFound,
    /// The caller is authenticated but does not own the resource.
    Forbidden,
    /// The caller owns the resource.
    Allowed,
}

/// Outcome of an ownership check for a read-only view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewDecision {
    /// The caller is not authenticated at all.
    Unauthenticated,
    /// The resource does not exist.
    NotFound,
    /// Any authenticated identity may view; `is_owner` drives whether the
    /// caller may be offered edit/delete affordances.
    Allowed {
        /// Whether the viewer owns the resource.
        is_owner: bool,
    },
}

/// Decides whether `identity` may mutate (edit/delete) the resource.
///
/// `resource` is the ownership record fetched fresh for this request, or
/// `None` when no such resource exists.
pub fn authorize_mutation(
    identity: &Identity,
    resource: Option<&PostOwnership>,
) -> AccessDecision {
    let Some(user_id) = identity.user_id() else {
        return AccessDecision::Unauthenticated;
    };

    match resource {
        None => AccessDecision::NotFound,
        Some(ownership) if ownership.author_id == user_id => AccessDecision::Allowed,
        Some(_) => AccessDecision::Forbidden,
    }
}

/// Decides whether `identity` may view the resource.
pub fn authorize_view(identity: &Identity, resource: Option<&PostOwnership>) -> ViewDecision {
    let Some(user_id) = identity.user_id() else {
        return ViewDecision::Unauthenticated;
    };

    match resource {
        None => ViewDecision::NotFound,
        Some(ownership) => ViewDecision::Allowed {
            is_owner: ownership.author_id == user_id,
        },
    }
}
