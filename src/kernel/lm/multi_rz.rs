//! `MultiRZ`: a diagonal gate over an arbitrary wire list, the only
//! variadic-arity operation in the gate set.

use crate::math::{parity::parity_mask, Precision, C};

fn half<P: Precision>(theta: P) -> P {
    theta / (P::one() + P::one())
}

pub fn apply_multi_rz<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], inverse: bool, theta: P) {
    let theta = if inverse { -theta } else { theta };
    let h = half(theta);
    let shift = [C::new(h.cos(), -h.sin()), C::new(h.cos(), h.sin())];
    let mask = parity_mask(wires, n_qubits);
    for (idx, amp) in buf.iter_mut().enumerate() {
        let parity = (idx & mask).count_ones() as usize % 2;
        *amp = *amp * shift[parity];
    }
}

/// The `MultiRZ` generator is `Z^{\otimes k}/2` restricted to the operand
/// wires: negate every amplitude whose operand-wire parity is odd.
pub fn generator_multi_rz<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize]) -> P {
    let mask = parity_mask(wires, n_qubits);
    for (idx, amp) in buf.iter_mut().enumerate() {
        if (idx & mask).count_ones() % 2 == 1 {
            *amp = -*amp;
        }
    }
    P::from_f64(-0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_rz_pi_on_all_zero_state() {
        let mut buf = vec![C::<f64>::new(1.0, 0.0), C::new(0.0, 0.0), C::new(0.0, 0.0), C::new(0.0, 0.0)];
        apply_multi_rz(&mut buf, 2, &[0, 1], false, std::f64::consts::PI);
        let expected = C::new(std::f64::consts::FRAC_PI_2.cos(), -std::f64::consts::FRAC_PI_2.sin());
        assert!((buf[0].re - expected.re).abs() < 1e-10);
        assert!((buf[0].im - expected.im).abs() < 1e-10);
        assert_eq!(buf[1], C::new(0.0, 0.0));
    }

    #[test]
    fn multi_rz_then_inverse_recovers_state() {
        let mut buf = vec![C::<f64>::new(0.3, 0.2), C::new(-0.1, 0.4), C::new(0.2, -0.3), C::new(0.5, 0.1)];
        let original = buf.clone();
        apply_multi_rz(&mut buf, 2, &[0, 1], false, 0.77);
        apply_multi_rz(&mut buf, 2, &[0, 1], true, 0.77);
        for (a, b) in buf.iter().zip(&original) {
            assert!((a.re - b.re).abs() < 1e-10);
            assert!((a.im - b.im).abs() < 1e-10);
        }
    }
}
