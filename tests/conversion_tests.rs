use tafqeet::utils::error::{INVALID_SENTINEL, TOO_LARGE_SENTINEL};
use tafqeet::{convert, tafqeet, tafqeet_f64, Amount, Converter, Scale, TafqeetError};

const PAUCITY: &str = "جنيهات مصرية";
const ACCUSATIVE: &str = "جنيهًا مصريًا";
const GENITIVE: &str = "جنيه مصري";

#[test]
fn test_boundary_scenarios() {
    assert_eq!(tafqeet(0), "فقط لا غير");
    assert_eq!(tafqeet(1), "فقط جنيه مصري واحد لا غير");
    assert_eq!(tafqeet(2), "فقط جنيهان مصريان لا غير");
    assert_eq!(tafqeet(11), "فقط أحد عشر جنيهًا مصريًا لا غير");
    assert_eq!(tafqeet(100), "فقط مائة جنيه مصري لا غير");
    assert_eq!(tafqeet(1_000), "فقط ألف جنيه مصري لا غير");
    assert_eq!(tafqeet(2_000), "فقط ألفان جنيه مصري لا غير");
    assert_eq!(
        tafqeet(507_923),
        "فقط خمسمائة وسبعة آلاف وتسعمائة وثلاثة وعشرون جنيهًا مصريًا لا غير"
    );
}

#[test]
fn test_large_composite_amounts() {
    assert_eq!(
        tafqeet(3_005_010),
        "فقط ثلاثة ملايين وخمسة آلاف وعشرة جنيهات مصرية لا غير"
    );
    assert_eq!(
        tafqeet(2_000_001),
        "فقط مليونان وواحد جنيهًا مصريًا لا غير"
    );
    assert_eq!(
        tafqeet(999_999_999),
        "فقط تسعمائة وتسعة وتسعون مليون وتسعمائة وتسعة وتسعون ألف وتسعمائة وتسعة وتسعون جنيهًا مصريًا لا غير"
    );
    assert_eq!(
        tafqeet(12_000),
        "فقط اثنا عشر ألف جنيه مصري لا غير"
    );
}

#[test]
fn test_billions_when_enabled() {
    let converter = Converter::new(Scale::Billion);
    assert_eq!(
        converter.render(2_000_000_000u64),
        "فقط ملياران جنيه مصري لا غير"
    );
    assert_eq!(
        converter.render(7_000_000_015u64),
        "فقط سبعة مليارات وخمسة عشر جنيهًا مصريًا لا غير"
    );
}

#[test]
fn test_too_large_sentinel() {
    assert_eq!(tafqeet(1_000_000_000), TOO_LARGE_SENTINEL);
    assert_eq!(tafqeet(u64::MAX), TOO_LARGE_SENTINEL);
    assert!(matches!(
        convert(1_000_000_000),
        Err(TafqeetError::AmountTooLarge { .. })
    ));
}

#[test]
fn test_invalid_sentinel() {
    assert_eq!(tafqeet_f64(-1.0), INVALID_SENTINEL);
    assert_eq!(tafqeet_f64(f64::NAN), INVALID_SENTINEL);
    assert_eq!(tafqeet_f64(f64::NEG_INFINITY), INVALID_SENTINEL);
    assert!(Amount::try_from(-25_i64).is_err());
    assert_eq!(Converter::default().render_input("-25"), INVALID_SENTINEL);
}

#[test]
fn test_currency_noun_follows_last_two_digits() {
    let samples = (3..2_000u64).chain((999_000..1_001_000u64).step_by(7));

    for n in samples {
        let text = tafqeet(n);
        let tail = n % 100;
        let expected = match tail {
            0 => GENITIVE,
            3..=10 => PAUCITY,
            _ => ACCUSATIVE,
        };
        let suffix = format!("{} لا غير", expected);
        assert!(text.ends_with(&suffix), "{} -> {}", n, text);
    }
}

#[test]
fn test_output_is_framed_and_never_dangles_conjunction() {
    for n in (0..5_000u64).chain((0..999_999_999u64).step_by(9_973)) {
        let text = tafqeet(n);
        assert!(text.starts_with("فقط "), "{} -> {}", n, text);
        assert!(text.ends_with(" لا غير"), "{} -> {}", n, text);
        assert!(!text.contains("  "), "{} -> {}", n, text);
        assert!(
            text.split_whitespace().all(|token| token != "و"),
            "{} -> {}",
            n,
            text
        );
        assert!(!text.contains("فقط و"), "{} -> {}", n, text);
    }
}

#[test]
fn test_determinism() {
    for n in [0u64, 1, 2, 11, 100, 1_000, 507_923, 999_999_999, 1_000_000_000] {
        assert_eq!(tafqeet(n), tafqeet(n));
    }
}

#[test]
fn test_concurrent_calls_agree() {
    let converter = Converter::default();
    let expected: Vec<String> = (0..500u64).map(|n| converter.render(n * 1_997)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| (0..500u64).map(|n| converter.render(n * 1_997)).collect::<Vec<_>>()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
