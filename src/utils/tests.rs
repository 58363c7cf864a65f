use fastrand::Rng;

use crate::utils::{
    MAX_LEVEL, UtilsError, parse_dice, primes_for_level, roll_dice, validate_dice,
    validate_primes,
};

#[test]
fn test_primes_for_level() {
    assert_eq!(primes_for_level(1), Ok(&[3, 5, 7][..]));
    assert_eq!(primes_for_level(5), Ok(&[43, 47, 53][..]));
    assert_eq!(primes_for_level(9), Ok(&[101, 103, 107][..]));
}

#[test]
fn test_primes_for_level_out_of_range() {
    assert_eq!(
        primes_for_level(0),
        Err(UtilsError::InvalidLevel {
            level: 0,
            max: MAX_LEVEL
        })
    );
    assert!(primes_for_level(10).is_err());
}

#[test]
fn test_every_level_has_three_ascending_primes() {
    for level in 1..=MAX_LEVEL {
        let primes = primes_for_level(level);
        assert!(primes.is_ok());
        if let Ok(primes) = primes {
            assert_eq!(primes.len(), 3);
            assert!(primes.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}

#[test]
fn test_roll_dice_range() {
    let mut rng = Rng::with_seed(7);
    let dice = roll_dice(200, &mut rng);
    assert_eq!(dice.len(), 200);
    assert!(dice.iter().all(|die| (1..=6).contains(die)));
}

#[test]
fn test_roll_dice_is_seeded() {
    let first = roll_dice(10, &mut Rng::with_seed(42));
    let second = roll_dice(10, &mut Rng::with_seed(42));
    assert_eq!(first, second);
}

#[test]
fn test_parse_dice() {
    assert_eq!(parse_dice("1,2,3"), Ok(vec![1, 2, 3]));
    assert_eq!(parse_dice(" 6 , 1,4 "), Ok(vec![6, 1, 4]));
    assert!(matches!(
        parse_dice("1,x,3"),
        Err(UtilsError::InvalidDiceList(_))
    ));
}

#[test]
fn test_validate_dice() {
    assert!(validate_dice(&[1, 2, 3, 4]).is_ok());
    assert_eq!(validate_dice(&[]), Err(UtilsError::EmptyDice));
    assert_eq!(
        validate_dice(&[3, 0, 2]),
        Err(UtilsError::NonPositiveDie { index: 1, value: 0 })
    );
    assert!(matches!(
        validate_dice(&[1; 64]),
        Err(UtilsError::TooManyDice { count: 64, .. })
    ));
}

#[test]
fn test_validate_primes() {
    assert!(validate_primes(&[3, 5, 7]).is_ok());
    assert!(validate_primes(&[11]).is_ok());
    assert_eq!(validate_primes(&[]), Err(UtilsError::EmptyPrimes));
    assert_eq!(
        validate_primes(&[3, -5]),
        Err(UtilsError::NonPositivePrime(-5))
    );
    assert!(matches!(
        validate_primes(&[2, 3, 5, 7]),
        Err(UtilsError::TooManyPrimes { count: 4, .. })
    ));
}
