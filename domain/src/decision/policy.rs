//! Approval policy over readiness and integration complexity
//!
//! The policy is also communicated to the model as instruction text; the
//! model's self-reported approval type is validated here and clamped down
//! when it is more permissive than the numbers allow. Clamping never loosens
//! a decision: a model that rejects is never overridden to approve.

use super::{ApprovalType, Decision, DecisionResponse};

/// The approval type the readiness/complexity numbers permit.
///
/// - readiness >= 0.80 and complexity <= 0.60 -> Unconditional
/// - readiness >= 0.60 and complexity <= 0.80 -> Conditional
/// - otherwise -> Rejected
pub fn permitted_approval(readiness: f64, complexity: f64) -> ApprovalType {
    if readiness >= 0.80 && complexity <= 0.60 {
        ApprovalType::Unconditional
    } else if readiness >= 0.60 && complexity <= 0.80 {
        ApprovalType::Conditional
    } else {
        ApprovalType::Rejected
    }
}

/// Build the terminal decision from the model's response, enforcing the
/// policy bounds against the upstream scalars.
pub fn enforce(response: DecisionResponse, readiness: f64, complexity: f64) -> Decision {
    let bound = permitted_approval(readiness, complexity);
    let approval_type = response.approval_type.min_with(bound);
    Decision {
        approved: approval_type.is_approved(),
        approval_type,
        confidence: response.confidence.clamp(0.0, 1.0),
        actions: response.actions,
        conditions: response.conditions,
        reasoning: response.reasoning,
    }
}
