//! End-to-end tests of the decimal arithmetic.

use bigdec::BigDecimal;
use bigdec::Error;

fn num(s: &str) -> BigDecimal {
    BigDecimal::parse(s).unwrap()
}

#[test]
fn test_zero_canonicalization() {
    assert_eq!(num("-0"), num("0"));
    assert_eq!(num("-0").format(), "0");
    assert_eq!(num("0.000").format(), "0");
    assert_eq!(num("-0.000"), num("0"));
    assert!(num("-0").sign().is_positive());

    // zero results of arithmetic are canonical as well
    assert_eq!(num("2.50").sub(&num("2.5")).format(), "0");
    assert_eq!(num("7.5").rem(&num("2.5"), 1).unwrap().format(), "0");
}

#[test]
fn test_commutativity() {
    let values = ["0", "1", "-1", "0.5", "-123.456", "99999999999999999999", "0.00001"];

    for s1 in values {
        for s2 in values {
            let d1 = num(s1);
            let d2 = num(s2);

            assert_eq!(d1.add(&d2), d2.add(&d1), "{} + {}", s1, s2);
            assert_eq!(d1.mul(&d2), d2.mul(&d1), "{} * {}", s1, s2);
        }
    }
}

#[test]
fn test_mul_scale_floor() {
    let values = ["1.5", "-0.25", "123.456", "0.1"];

    for s1 in values {
        for s2 in values {
            let d1 = num(s1);
            let d2 = num(s2);

            for scale in 0..5 {
                let p = d1.mul_scaled(&d2, scale);
                assert!(
                    p.scale() >= d1.scale().min(d2.scale()),
                    "{} * {} at scale {}",
                    s1,
                    s2,
                    scale
                );
            }
        }
    }
}

#[test]
fn test_truncating_division() {
    assert_eq!(num("10").div(&num("3"), 0).unwrap(), num("3"));
    assert_eq!(num("10").div(&num("3"), 10).unwrap(), num("3.3333333333"));
}

#[test]
fn test_modulo_consistency() {
    assert_eq!(num("10").rem(&num("3"), 0).unwrap(), num("1"));
    assert_eq!(num("-2").rem(&num("1.60"), 0).unwrap(), num("-0.40"));

    // lhs == div(lhs, rhs) * rhs + rem(lhs, rhs)
    for (s1, s2) in [("10", "3"), ("-2", "1.60"), ("7.25", "-0.5"), ("-100", "-7")] {
        let d1 = num(s1);
        let d2 = num(s2);

        let q = d1.div(&d2, 0).unwrap();
        let r = d1.rem(&d2, 0).unwrap();
        assert_eq!(q.mul(&d2).add(&r), d1, "{} / {}", s1, s2);
    }
}

#[test]
fn test_sqrt_precision() {
    assert_eq!(num("2").sqrt(10).unwrap(), num("1.4142135623"));
    assert_eq!(num("0").sqrt(0).unwrap_err(), Error::NonPositiveArgument);
    assert_eq!(num("-1").sqrt(0).unwrap_err(), Error::NonPositiveArgument);
}

#[test]
fn test_power_law() {
    assert_eq!(num("2").pow(3, 0).unwrap(), num("8"));
    assert_eq!(num("2").pow(-3, 5).unwrap(), num("0.12500"));
}

#[test]
fn test_conversion_overflow() {
    assert_eq!(num("10000").to_u8().unwrap_err(), Error::ConversionOverflow);
}

// Regression: the product of two 160-digit numbers must match the exact
// 320-digit result, covering the full depth of the multiplication recursion.
#[test]
fn test_large_magnitude_mul() {
    let a = num(
        "1527157663013559942203813339228903505027710833897139141463484504812165676474\
         067183011458447402977338556929895708844025038166518930788914842890958965483250299960",
    );
    let b = num(
        "9196415925004932853965385661009685851941120481529266850325321047743236078557\
         532623386582347708668349805216324475075402414372347974730579850112757955579640587098",
    );
    let p = num(
        "1404437705213121938915899412678804796094925983846646502769026569023885151708\
         1653971095008216926782151293369072948587311392173117050025563090575909565573553894\
         0985488041776216113818870801756509827723311027331925190514504223134571659581158798\
         4390691936158629665626643709961688011580685511147768058292556410295409900591608\
         0",
    );

    assert_eq!(a.mul(&b), p);
}
