//! Integration tests for bivariate factorization into `Y - P(X)` factors

use proptest::prelude::*;
use rsdecode::factor::{factor, y_roots};
use rsdecode::{BiPoly, Gf257, Poly};

fn small_poly(max_len: usize) -> impl Strategy<Value = Poly<257>> {
    prop::collection::vec((0u32..257).prop_map(Gf257::new), 1..max_len).prop_map(Poly::new)
}

proptest! {
    /// Property: every P_i of a product of (Y - P_i) is recovered, and the
    /// factorization multiplies back to the input
    #[test]
    fn prop_product_of_linear_factors(
        roots in prop::collection::vec(small_poly(4), 1..4),
        cofactor in small_poly(3),
    ) {
        prop_assume!(!cofactor.is_zero());
        let q = roots
            .iter()
            .fold(BiPoly::from_x(cofactor), |acc, p| &acc * &BiPoly::y_minus(p));

        let factorization = factor(&q).unwrap();
        let found: Vec<Poly<257>> = factorization.y_linear_roots().collect();
        for p in &roots {
            prop_assert!(found.contains(p), "missing root {}", p);
        }
        prop_assert_eq!(factorization.product(), q);
    }

    /// Property: y_roots only returns genuine roots, and finds a planted one
    #[test]
    fn prop_y_roots_are_roots(
        coeffs in prop::collection::vec((0u32..257).prop_map(Gf257::new), 12),
        planted in small_poly(3),
    ) {
        let q = &BiPoly::from_flat(&coeffs, 3, 2).unwrap() * &BiPoly::y_minus(&planted);
        prop_assume!(!q.is_zero());
        let bound = q.degree_x().unwrap_or(0);
        let roots = y_roots(&q, bound).unwrap();
        prop_assert!(roots.contains(&planted));
        for root in &roots {
            prop_assert!(q.evaluate_y(root).is_zero());
        }
    }
}

#[test]
fn test_repeated_factor_multiplicity() {
    let p = Poly::new(vec![Gf257::new(97), Gf257::new(98), Gf257::new(99)]);
    let linear = BiPoly::y_minus(&p);
    let q = &(&linear * &linear) * &linear;

    let factorization = factor(&q).unwrap();
    assert_eq!(factorization.factors(), &[(linear, 3)]);
    assert_eq!(factorization.unit(), Gf257::ONE);
}

#[test]
fn test_interpolation_shaped_polynomial() {
    // (Y - (1 + 2x)) * (Y - 5x^2) * (x + 3), scaled by 7
    let p1 = Poly::new(vec![Gf257::new(1), Gf257::new(2)]);
    let p2 = Poly::monomial(Gf257::new(5), 2);
    let q = (&(&BiPoly::y_minus(&p1) * &BiPoly::y_minus(&p2))
        * &BiPoly::from_x(Poly::new(vec![Gf257::new(3), Gf257::ONE])))
        .scale(Gf257::new(7));

    let factorization = factor(&q).unwrap();
    let roots: Vec<Poly<257>> = factorization.y_linear_roots().collect();
    assert_eq!(roots.len(), 2);
    assert!(roots.contains(&p1) && roots.contains(&p2));
    assert_eq!(factorization.unit(), Gf257::new(7));
    assert_eq!(factorization.product(), q);
}
