//! Forward and backward action masks over per-feature score vectors.
//!
//! A model scores all F candidate actions at once for a given state
//! encoding; the mask is what keeps that dense output aligned with the
//! legal moves of the state graph. Forward actions may only add absent
//! features, backward actions may only remove present ones. Flow-style
//! outputs are masked multiplicatively so the surviving entries stay
//! strictly positive; log-space outputs are pinned to [`MASKED_LOGIT`].

use faceflow_core::Encoding;
use tracing::debug;

use crate::error::{PolicyError, PolicyResult};

/// Additive mask for log-space outputs. exp(-100) underflows to a
/// negligible probability without introducing -inf into downstream
/// arithmetic.
pub const MASKED_LOGIT: f32 = -100.0;

fn check_len(scores: &[f32], x: &Encoding) -> PolicyResult<()> {
    if scores.len() != x.len() {
        return Err(PolicyError::LengthMismatch {
            expected: x.len(),
            got: scores.len(),
        });
    }
    Ok(())
}

/// Zero the flow of every feature already present: forward actions only
/// add features.
pub fn forward_flow_mask(flows: &[f32], x: &Encoding) -> PolicyResult<Vec<f32>> {
    check_len(flows, x)?;
    Ok(flows
        .iter()
        .enumerate()
        .map(|(i, &f)| if x.is_set(i) { 0.0 } else { f })
        .collect())
}

/// Zero the flow of every feature not present: backward actions only
/// remove features that exist.
pub fn backward_flow_mask(flows: &[f32], x: &Encoding) -> PolicyResult<Vec<f32>> {
    check_len(flows, x)?;
    Ok(flows
        .iter()
        .enumerate()
        .map(|(i, &f)| if x.is_set(i) { f } else { 0.0 })
        .collect())
}

/// Pin the logits of present features to [`MASKED_LOGIT`].
pub fn forward_logit_mask(logits: &[f32], x: &Encoding) -> PolicyResult<Vec<f32>> {
    check_len(logits, x)?;
    Ok(logits
        .iter()
        .enumerate()
        .map(|(i, &l)| if x.is_set(i) { MASKED_LOGIT } else { l })
        .collect())
}

/// Pin the logits of absent features to [`MASKED_LOGIT`].
pub fn backward_logit_mask(logits: &[f32], x: &Encoding) -> PolicyResult<Vec<f32>> {
    check_len(logits, x)?;
    Ok(logits
        .iter()
        .enumerate()
        .map(|(i, &l)| if x.is_set(i) { l } else { MASKED_LOGIT })
        .collect())
}

/// Indices a forward action may select: features absent from the state.
pub fn valid_forward_actions(x: &Encoding) -> Vec<usize> {
    (0..x.len()).filter(|&i| !x.is_set(i)).collect()
}

/// Indices a backward action may select: features present in the state.
pub fn valid_backward_actions(x: &Encoding) -> Vec<usize> {
    (0..x.len()).filter(|&i| x.is_set(i)).collect()
}

/// Check that a flow vector honors the forward mask: exactly zero at
/// every present feature, strictly positive everywhere else.
pub fn verify_forward_flows(flows: &[f32], x: &Encoding) -> PolicyResult<()> {
    check_len(flows, x)?;
    for (i, &flow) in flows.iter().enumerate() {
        if x.is_set(i) {
            if flow != 0.0 {
                debug!(index = i, value = flow, "forward mask violated");
                return Err(PolicyError::MaskViolation {
                    index: i,
                    value: flow,
                });
            }
        } else if flow <= 0.0 {
            return Err(PolicyError::NonPositiveFlow {
                index: i,
                value: flow,
            });
        }
    }
    Ok(())
}

/// Check that a flow vector honors the backward mask: exactly zero at
/// every absent feature, strictly positive at present ones.
pub fn verify_backward_flows(flows: &[f32], x: &Encoding) -> PolicyResult<()> {
    check_len(flows, x)?;
    for (i, &flow) in flows.iter().enumerate() {
        if x.is_set(i) {
            if flow <= 0.0 {
                return Err(PolicyError::NonPositiveFlow {
                    index: i,
                    value: flow,
                });
            }
        } else if flow != 0.0 {
            debug!(index = i, value = flow, "backward mask violated");
            return Err(PolicyError::MaskViolation {
                index: i,
                value: flow,
            });
        }
    }
    Ok(())
}
