//! Single- and double-excitation gates: a rotation restricted to the
//! subspace of basis states with exactly one (respectively two) set wires
//! among the operand's wires, optionally dressed with a global phase on
//! the untouched states.

use crate::math::{parity::scatter_index, Precision, C};

fn half<P: Precision>(theta: P) -> P {
    theta / (P::one() + P::one())
}

/// `phase_sign`: `None` for the plain gate (complement amplitudes
/// untouched); `Some(+1)`/`Some(-1)` for the Plus/Minus variants, which
/// multiply every complement amplitude by `e^{(sign)*i*theta/2}`.
fn excitation_rotate<P: Precision>(
    buf: &mut [C<P>],
    n_qubits: usize,
    wires: &[usize],
    inverse: bool,
    theta: P,
    lo_pattern: usize,
    hi_pattern: usize,
    phase_sign: Option<P>,
) {
    let theta = if inverse { -theta } else { theta };
    let h = half(theta);
    let (c, s) = (h.cos(), h.sin());
    let dim = 1usize << wires.len();
    let phase = phase_sign.map(|sign| C::new((h * sign).cos(), (h * sign).sin()));

    for outer in (0..(1usize << n_qubits)).step_by(dim) {
        if let Some(ph) = phase {
            for inner in 0..dim {
                if inner == lo_pattern || inner == hi_pattern {
                    continue;
                }
                let idx = scatter_index(outer, inner, wires, n_qubits);
                buf[idx] = buf[idx] * ph;
            }
        }
        let i_lo = scatter_index(outer, lo_pattern, wires, n_qubits);
        let i_hi = scatter_index(outer, hi_pattern, wires, n_qubits);
        let a = buf[i_lo];
        let b = buf[i_hi];
        buf[i_lo] = a.scale(c) - b.scale(s);
        buf[i_hi] = a.scale(s) + b.scale(c);
    }
}

/// Generator shared by every excitation gate: zero every complement
/// amplitude, then apply the PauliY action the `[[c,-s],[s,c]]` rotation
/// block's derivative reduces to on the excitation manifold. Scale `-0.5`,
/// consistent with the other single-parameter rotation generators.
fn excitation_generator<P: Precision>(
    buf: &mut [C<P>],
    n_qubits: usize,
    wires: &[usize],
    lo_pattern: usize,
    hi_pattern: usize,
) -> P {
    let dim = 1usize << wires.len();
    for outer in (0..(1usize << n_qubits)).step_by(dim) {
        for inner in 0..dim {
            if inner == lo_pattern || inner == hi_pattern {
                continue;
            }
            let idx = scatter_index(outer, inner, wires, n_qubits);
            buf[idx] = C::new(P::zero(), P::zero());
        }
        let i_lo = scatter_index(outer, lo_pattern, wires, n_qubits);
        let i_hi = scatter_index(outer, hi_pattern, wires, n_qubits);
        let (a, b) = (buf[i_lo], buf[i_hi]);
        buf[i_lo] = C::new(b.im, -b.re);
        buf[i_hi] = C::new(-a.im, a.re);
    }
    P::from_f64(-0.5)
}

const SINGLE_LO: usize = 0b01;
const SINGLE_HI: usize = 0b10;
const DOUBLE_LO: usize = 0b0011;
const DOUBLE_HI: usize = 0b1100;

pub fn apply_single_excitation<P: Precision>(buf: &mut [C<P>], n: usize, wires: &[usize], inverse: bool, theta: P) {
    excitation_rotate(buf, n, wires, inverse, theta, SINGLE_LO, SINGLE_HI, None);
}

pub fn apply_single_excitation_minus<P: Precision>(buf: &mut [C<P>], n: usize, wires: &[usize], inverse: bool, theta: P) {
    excitation_rotate(buf, n, wires, inverse, theta, SINGLE_LO, SINGLE_HI, Some(-P::one()));
}

pub fn apply_single_excitation_plus<P: Precision>(buf: &mut [C<P>], n: usize, wires: &[usize], inverse: bool, theta: P) {
    excitation_rotate(buf, n, wires, inverse, theta, SINGLE_LO, SINGLE_HI, Some(P::one()));
}

pub fn apply_double_excitation<P: Precision>(buf: &mut [C<P>], n: usize, wires: &[usize], inverse: bool, theta: P) {
    excitation_rotate(buf, n, wires, inverse, theta, DOUBLE_LO, DOUBLE_HI, None);
}

pub fn apply_double_excitation_minus<P: Precision>(buf: &mut [C<P>], n: usize, wires: &[usize], inverse: bool, theta: P) {
    excitation_rotate(buf, n, wires, inverse, theta, DOUBLE_LO, DOUBLE_HI, Some(-P::one()));
}

pub fn apply_double_excitation_plus<P: Precision>(buf: &mut [C<P>], n: usize, wires: &[usize], inverse: bool, theta: P) {
    excitation_rotate(buf, n, wires, inverse, theta, DOUBLE_LO, DOUBLE_HI, Some(P::one()));
}

pub fn generator_single_excitation<P: Precision>(buf: &mut [C<P>], n: usize, wires: &[usize]) -> P {
    excitation_generator(buf, n, wires, SINGLE_LO, SINGLE_HI)
}

pub fn generator_single_excitation_minus<P: Precision>(buf: &mut [C<P>], n: usize, wires: &[usize]) -> P {
    excitation_generator(buf, n, wires, SINGLE_LO, SINGLE_HI)
}

pub fn generator_single_excitation_plus<P: Precision>(buf: &mut [C<P>], n: usize, wires: &[usize]) -> P {
    excitation_generator(buf, n, wires, SINGLE_LO, SINGLE_HI)
}

pub fn generator_double_excitation<P: Precision>(buf: &mut [C<P>], n: usize, wires: &[usize]) -> P {
    excitation_generator(buf, n, wires, DOUBLE_LO, DOUBLE_HI)
}

pub fn generator_double_excitation_minus<P: Precision>(buf: &mut [C<P>], n: usize, wires: &[usize]) -> P {
    excitation_generator(buf, n, wires, DOUBLE_LO, DOUBLE_HI)
}

pub fn generator_double_excitation_plus<P: Precision>(buf: &mut [C<P>], n: usize, wires: &[usize]) -> P {
    excitation_generator(buf, n, wires, DOUBLE_LO, DOUBLE_HI)
}
