use proptest::prelude::*;
use vencfg_domain::value::HexColor;

proptest! {
    #[test]
    fn color_marker_roundtrip_six_digits(digits in "[0-9a-fA-F]{6}") {
        let color = HexColor::parse(&digits).unwrap();
        prop_assert_eq!(color.as_str(), digits.as_str());

        // Restoring the marker and stripping it again yields the input unchanged.
        let restored = color.css();
        let stripped = HexColor::parse(&restored).unwrap();
        prop_assert_eq!(stripped.as_str(), digits.as_str());
    }

    #[test]
    fn color_marker_roundtrip_eight_digits(digits in "[0-9a-fA-F]{8}") {
        let color = HexColor::parse(&format!("#{digits}")).unwrap();
        prop_assert_eq!(color.css(), format!("#{digits}"));
    }

    #[test]
    fn color_rejects_non_hex_lengths(digits in "[0-9a-f]{1,5}|[0-9a-f]{7}|[0-9a-f]{9,12}") {
        prop_assert!(HexColor::parse(&digits).is_err());
    }
}
