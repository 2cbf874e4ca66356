//! Default dispatch policy installed once, on first access to the
//! registry: LM is the universal fallback; PI overrides it on the small
//! qubit counts where its precomputed index lists pay off.

use super::{DispatchElement, DispatchInterval, DispatchKey, Registry};
use crate::ops::{all_operations, BackendTag, GateOp, MatrixOp, Operation};

const PI_FAVORABLE: DispatchInterval = DispatchInterval { lo: 1, hi: 6 };

pub fn install_defaults(registry: &mut Registry) {
    for key in DispatchKey::all() {
        for op in all_operations() {
            registry
                .priority_set_mut(op, key)
                .insert(DispatchElement {
                    priority: 0,
                    interval: DispatchInterval::unbounded_from(0),
                    kernel: BackendTag::LM,
                })
                .expect("default LM fallback never conflicts on a freshly built table");
        }
    }

    for key in DispatchKey::all() {
        for op in pi_favored_operations() {
            registry
                .priority_set_mut(op, key)
                .insert(DispatchElement {
                    priority: 5,
                    interval: PI_FAVORABLE,
                    kernel: BackendTag::PI,
                })
                .expect("PI override interval is disjoint from the LM fallback's priority level");
        }
    }
}

fn pi_favored_operations() -> impl Iterator<Item = Operation> {
    [
        Operation::Gate(GateOp::Hadamard),
        Operation::Gate(GateOp::SWAP),
        Operation::Matrix(MatrixOp::MultiQubitOp),
    ]
    .into_iter()
}
