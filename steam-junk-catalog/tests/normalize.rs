use steam_junk_catalog::normalize::*;
use steam_junk_catalog::FieldError;

#[test]
fn price_free_markers_are_zero() {
    assert_eq!(normalize_price("Free").unwrap(), 0.0);
    assert_eq!(normalize_price("\u{2014}").unwrap(), 0.0);
}

#[test]
fn price_strips_currency_symbol() {
    assert_eq!(normalize_price("$19.99").unwrap(), 19.99);
    assert_eq!(normalize_price("€4.50").unwrap(), 4.5);
    assert_eq!(normalize_price("59.99").unwrap(), 59.99);
}

#[test]
fn price_rejects_non_numeric() {
    assert_eq!(
        normalize_price("$abc"),
        Err(FieldError::format("price", "$abc"))
    );
    assert!(normalize_price("").is_err());
    assert!(normalize_price("$").is_err());
    assert!(normalize_price("free").is_err());
}

#[test]
fn price_rejects_negative() {
    assert!(normalize_price("$-5.00").is_err());
}

#[test]
fn percentage_strips_sign() {
    assert_eq!(normalize_percentage("98%").unwrap(), 98.0);
    assert_eq!(normalize_percentage("73.5%").unwrap(), 73.5);
    assert_eq!(normalize_percentage("0%").unwrap(), 0.0);
    assert_eq!(normalize_percentage("100%").unwrap(), 100.0);
}

#[test]
fn percentage_out_of_range_or_garbage() {
    assert!(normalize_percentage("101%").is_err());
    assert!(normalize_percentage("-1%").is_err());
    assert!(normalize_percentage("n/a").is_err());
    assert!(normalize_percentage("%").is_err());
}

#[test]
fn date_composes_iso() {
    assert_eq!(normalize_date("15 Jan", "2023").unwrap(), "2023-01-15");
    assert_eq!(normalize_date("16 Nov", "2004").unwrap(), "2004-11-16");
}

#[test]
fn date_zero_pads_day() {
    assert_eq!(normalize_date("5 Mar", "2019").unwrap(), "2019-03-05");
    assert_eq!(normalize_date("05 Mar", "2019").unwrap(), "2019-03-05");
}

#[test]
fn date_unknown_month_is_lookup_error() {
    assert_eq!(
        normalize_date("15 Foo", "2023"),
        Err(FieldError::unknown_month("Foo"))
    );
    // Abbreviations are case-sensitive.
    assert!(matches!(
        normalize_date("15 jan", "2023"),
        Err(FieldError::UnknownMonth(_))
    ));
}

#[test]
fn date_malformed_is_format_error() {
    assert!(matches!(
        normalize_date("Jan", "2023"),
        Err(FieldError::Format { .. })
    ));
    assert!(matches!(
        normalize_date("xx Jan", "2023"),
        Err(FieldError::Format { kind: "day", .. })
    ));
    assert!(matches!(
        normalize_date("15 Jan", "twenty"),
        Err(FieldError::Format { kind: "year", .. })
    ));
    assert!(matches!(
        normalize_date("15 Jan 2023", "2023"),
        Err(FieldError::Format { .. })
    ));
}

#[test]
fn date_year_must_be_four_digits() {
    for year in ["+2024", "02024", "-2024", "924", " 2024x"] {
        assert!(
            matches!(
                normalize_date("15 Jan", year),
                Err(FieldError::Format { kind: "year", .. })
            ),
            "year {year:?} should be rejected"
        );
    }
    assert_eq!(normalize_date("15 Jan", " 0999 ").unwrap(), "0999-01-15");
}

#[test]
fn date_rejects_impossible_day() {
    assert!(normalize_date("29 Feb", "2023").is_err());
    assert_eq!(normalize_date("29 Feb", "2024").unwrap(), "2024-02-29");
    assert!(normalize_date("0 Jan", "2024").is_err());
    assert!(normalize_date("32 Jan", "2024").is_err());
}

#[test]
fn integer_drops_separators() {
    assert_eq!(normalize_integer_with_separators("89,000").unwrap(), 89000);
    assert_eq!(normalize_integer_with_separators("1,234,567").unwrap(), 1234567);
    assert_eq!(normalize_integer_with_separators("42").unwrap(), 42);
}

#[test]
fn integer_rejects_empty_and_garbage() {
    assert!(normalize_integer_with_separators("").is_err());
    assert!(normalize_integer_with_separators(",,").is_err());
    assert!(normalize_integer_with_separators("12k").is_err());
    assert!(normalize_integer_with_separators("-5").is_err());
    assert!(normalize_integer_with_separators("1.5").is_err());
}

#[test]
fn playtime_average_and_median() {
    let p = normalize_playtime(" 25:17 (average) 12:03 (median)").unwrap();
    assert_eq!(p.average_minutes, 1517);
    assert_eq!(p.median_minutes, 723);
}

#[test]
fn playtime_malformed() {
    assert!(normalize_playtime("").is_err());
    assert!(normalize_playtime("25:17").is_err());
    assert!(normalize_playtime("25:17 (average) n/a").is_err());
}
