//! Inversion in Z_m[x]/(x^N - 1).
//!
//! For a prime modulus the inverse comes from the extended Euclidean
//! algorithm over GF(p)[x] against x^N - 1. For a power-of-two modulus the
//! inverse modulo 2 is lifted with Newton iteration `b <- b * (2 - a * b)`,
//! which doubles the number of correct bits per step.
//!
//! Every function returns `None` when no inverse exists; nothing here ever
//! substitutes an approximation.

use crate::arith::{inv_mod, is_prime, mulmod, submod};
use crate::poly::Poly;

/// Dense polynomial over GF(p), lowest degree first, no trailing zeros.
type Dense = Vec<u32>;

fn trim(mut a: Dense) -> Dense {
    while a.last() == Some(&0) {
        a.pop();
    }
    a
}

fn sub_dense(a: &[u32], b: &[u32], p: u32) -> Dense {
    let len = a.len().max(b.len());
    let out = (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            submod(x, y, p)
        })
        .collect();
    trim(out)
}

fn mul_dense(a: &[u32], b: &[u32], p: u32) -> Dense {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0u64; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        for (j, &y) in b.iter().enumerate() {
            out[i + j] = (out[i + j] + x as u64 * y as u64) % p as u64;
        }
    }
    trim(out.into_iter().map(|c| c as u32).collect())
}

/// Long division `a = quot * b + rem`; `b` must be nonzero with an
/// invertible leading coefficient.
fn divmod_dense(a: &[u32], b: &[u32], p: u32) -> Option<(Dense, Dense)> {
    let lead_inv = inv_mod(*b.last()?, p)?;
    let mut rem = trim(a.to_vec());
    if rem.len() < b.len() {
        return Some((Vec::new(), rem));
    }
    let mut quot = vec![0u32; rem.len() - b.len() + 1];
    while rem.len() >= b.len() {
        let shift = rem.len() - b.len();
        let factor = mulmod(*rem.last()?, lead_inv, p);
        quot[shift] = factor;
        for (k, &bk) in b.iter().enumerate() {
            rem[shift + k] = submod(rem[shift + k], mulmod(factor, bk, p), p);
        }
        rem = trim(rem);
    }
    Some((trim(quot), rem))
}

/// Inverse of `a` in GF(p)[x]/(x^N - 1) for a prime modulus p.
pub fn invert_mod_prime(a: &Poly) -> Option<Poly> {
    let p = a.modulus();
    let n = a.len();
    if n == 0 || !is_prime(p) {
        return None;
    }

    // x^N - 1
    let mut r0: Dense = vec![0; n + 1];
    r0[0] = p - 1;
    r0[n] = 1;
    let mut r1 = trim(a.coeffs().to_vec());
    let mut s0: Dense = Vec::new();
    let mut s1: Dense = vec![1];

    while !r1.is_empty() {
        let (quot, rem) = divmod_dense(&r0, &r1, p)?;
        let s2 = sub_dense(&s0, &mul_dense(&quot, &s1, p), p);
        r0 = std::mem::replace(&mut r1, rem);
        s0 = std::mem::replace(&mut s1, s2);
    }

    // r0 = gcd(a, x^N - 1); a is a unit only when the gcd is a constant.
    if r0.len() != 1 {
        return None;
    }
    let scale = inv_mod(r0[0], p)?;
    let mut coeffs = vec![0u32; n];
    for (i, &c) in s0.iter().enumerate() {
        let k = i % n;
        coeffs[k] = (coeffs[k] + mulmod(c, scale, p)) % p;
    }
    Some(Poly::from_coeffs(coeffs, p))
}

/// Inverse of `a` in Z_q[x]/(x^N - 1) for q a power of two.
pub fn invert_mod_pow2(a: &Poly) -> Option<Poly> {
    let q = a.modulus();
    if q < 2 || !q.is_power_of_two() {
        return None;
    }
    let n = a.len();

    let b2 = invert_mod_prime(&Poly::from_coeffs(a.coeffs().to_vec(), 2))?;
    let mut b = Poly::from_coeffs(b2.coeffs().to_vec(), q);
    let two = Poly::constant(2, n, q);

    // b is correct modulo `precision`; each step squares it.
    let mut precision = 2u64;
    while precision < q as u64 {
        b = b.mul(&two.sub(&a.mul(&b)));
        precision *= precision;
    }

    a.mul(&b).is_one().then_some(b)
}

/// Inverse under the polynomial's own modulus.
pub fn invert(a: &Poly) -> Option<Poly> {
    if a.modulus().is_power_of_two() {
        invert_mod_pow2(a)
    } else {
        invert_mod_prime(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::sample_ternary;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn inverts_over_gf3() {
        // 1 + x is a unit modulo x^5 - 1 over GF(3) since (1 + x) does not
        // vanish at 1 and 5 is odd.
        let a = Poly::from_coeffs(vec![1, 1, 0, 0, 0], 3);
        let inv = invert_mod_prime(&a).unwrap();
        assert!(a.mul(&inv).is_one());
    }

    #[test]
    fn zero_divisor_has_no_inverse() {
        // x - 1 divides x^N - 1.
        let a = Poly::from_coeffs(vec![2, 1, 0, 0, 0, 0, 0], 3);
        assert!(invert_mod_prime(&a).is_none());
        assert!(invert_mod_prime(&Poly::zero(7, 3)).is_none());

        // 1 + x has value 0 at x = 1 over GF(2).
        let b = Poly::from_coeffs(vec![1, 1, 0, 0, 0, 0, 0], 32);
        assert!(invert_mod_pow2(&b).is_none());
    }

    #[test]
    fn constant_inverse() {
        let a = Poly::constant(3, 11, 32);
        let inv = invert_mod_pow2(&a).unwrap();
        assert_eq!(inv, Poly::constant(11, 11, 32));
    }

    #[test]
    fn newton_lifting_reaches_q() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut found = 0;
        for _ in 0..20 {
            let f = sample_ternary(&mut rng, 107, 15, 14, 2048);
            if let Some(fq) = invert_mod_pow2(&f) {
                assert!(f.mul(&fq).is_one());
                assert_eq!(fq.modulus(), 2048);
                found += 1;
            }
        }
        assert!(found > 0);
    }

    #[test]
    fn dispatch_by_modulus() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let f = sample_ternary(&mut rng, 11, 3, 2, 32);
            if let (Some(fq), Some(fp)) = (invert(&f), invert(&f.reduce(3))) {
                assert!(f.mul(&fq).is_one());
                assert!(f.reduce(3).mul(&fp).is_one());
                return;
            }
        }
        panic!("no invertible ternary polynomial in 20 draws");
    }

    #[test]
    fn non_prime_modulus_is_rejected() {
        let a = Poly::one(5, 9);
        assert!(invert_mod_prime(&a).is_none());
    }
}
