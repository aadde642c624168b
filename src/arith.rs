//! Scalar modular arithmetic on canonical residues.

/// Modular multiplication: (a * b) mod m, via u64.
#[inline(always)]
pub const fn mulmod(a: u32, b: u32, m: u32) -> u32 {
    ((a as u64 * b as u64) % m as u64) as u32
}

/// Modular addition: (a + b) mod m, for a, b < m.
#[inline(always)]
pub const fn addmod(a: u32, b: u32, m: u32) -> u32 {
    let s = a as u64 + b as u64;
    (if s >= m as u64 { s - m as u64 } else { s }) as u32
}

/// Modular subtraction: (a - b) mod m, for a, b < m.
#[inline(always)]
pub const fn submod(a: u32, b: u32, m: u32) -> u32 {
    if a >= b { a - b } else { (a as u64 + m as u64 - b as u64) as u32 }
}

/// Canonical residue of a signed integer.
#[inline(always)]
pub fn reduce_signed(x: i64, m: u32) -> u32 {
    x.rem_euclid(m as i64) as u32
}

/// Balanced representative of `c` in (-m/2, m/2].
#[inline(always)]
pub fn center(c: u32, m: u32) -> i64 {
    if c > m / 2 { c as i64 - m as i64 } else { c as i64 }
}

/// Inverse of `a` modulo `m` by the extended Euclidean algorithm.
///
/// Returns `None` when `gcd(a, m) != 1`.
pub fn inv_mod(a: u32, m: u32) -> Option<u32> {
    if m == 0 {
        return None;
    }
    let m_i = m as i64;
    let (mut t, mut new_t) = (0i64, 1i64);
    let (mut r, mut new_r) = (m_i, (a % m) as i64);
    while new_r != 0 {
        let quot = r / new_r;
        (t, new_t) = (new_t, t - quot * new_t);
        (r, new_r) = (new_r, r - quot * new_r);
    }
    if r != 1 {
        return None;
    }
    Some(t.rem_euclid(m_i) as u32)
}

/// Trial-division primality test; moduli here are at most 16 bits.
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3u32;
    while (d as u64) * (d as u64) <= n as u64 {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub_wrap() {
        assert_eq!(addmod(30, 5, 32), 3);
        assert_eq!(submod(2, 5, 32), 29);
        assert_eq!(mulmod(31, 31, 32), 1);
    }

    #[test]
    fn inverse_exists_iff_coprime() {
        assert_eq!(inv_mod(2, 3), Some(2));
        assert_eq!(inv_mod(3, 32), Some(11));
        assert_eq!(inv_mod(4, 32), None);
        assert_eq!(inv_mod(0, 3), None);
        for a in 1..101u32 {
            let inv = inv_mod(a, 101).unwrap();
            assert_eq!(mulmod(a, inv, 101), 1);
        }
    }

    #[test]
    fn centering() {
        assert_eq!(center(2, 3), -1);
        assert_eq!(center(1, 3), 1);
        assert_eq!(center(16, 32), 16);
        assert_eq!(center(17, 32), -15);
        assert_eq!(reduce_signed(-1, 32), 31);
    }

    #[test]
    fn primality() {
        let primes: Vec<u32> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(is_prime(65_521));
        assert!(!is_prime(65_536));
    }
}
