//! Action-mask contract between the face state space and generative
//! models.
//!
//! Any model that scores the F candidate actions for a state must keep
//! its output aligned with the legal moves of the state graph:
//!
//! ```text
//! x = canonical encoding (1 = feature present, 0 = absent)
//!
//! forward scores:  masked where x_i = 1   (may only ADD absent features)
//! backward scores: masked where x_i = 0   (may only REMOVE present ones)
//! ```
//!
//! Flow-style outputs mask multiplicatively and must stay strictly
//! positive over the surviving actions; log-probability outputs pin
//! masked entries to [`MASKED_LOGIT`]. The contract is independent of
//! the model architecture; it is what keeps a model from assigning mass
//! to an action the enumerator would never produce.

mod error;
mod mask;
mod model;

pub use error::{PolicyError, PolicyResult};
pub use mask::{
    backward_flow_mask, backward_logit_mask, forward_flow_mask, forward_logit_mask,
    valid_backward_actions, valid_forward_actions, verify_backward_flows,
    verify_forward_flows, MASKED_LOGIT,
};
pub use model::{transition_flows, FlowFunction, TabularFlow, TrajectoryPolicy};
