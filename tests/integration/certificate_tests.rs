//! Certificate properties through the public API

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{OTHER_KEY, T0, TEST_KEY, TEST_SECRET, authority_at};
    use article_forge::license::{
        Certificate, CertificateAuthority, CertificateError, LicenseSecret, SECONDS_PER_DAY,
    };
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE;

    #[test]
    fn test_concrete_scenario() {
        let (authority, clock) = authority_at(T0);
        let certificate = authority.issue(TEST_KEY, 2).unwrap();

        assert!(authority.verify(TEST_KEY, &certificate));
        assert!(!authority.verify(OTHER_KEY, &certificate));

        clock.advance_days(1);
        assert!(authority.verify(TEST_KEY, &certificate));

        clock.advance_days(2);
        assert!(!authority.verify(TEST_KEY, &certificate));
    }

    #[test]
    fn test_wire_format() {
        let (authority, _) = authority_at(T0);
        let certificate = authority.issue(TEST_KEY, 2).unwrap();

        let (signature, expiration) = certificate.split_once('.').unwrap();
        assert!(!signature.is_empty());
        // 32-byte digest, padded
        assert_eq!(signature.len(), 44);
        let expiration = URL_SAFE.decode(expiration).unwrap();
        assert_eq!(
            String::from_utf8(expiration).unwrap(),
            (T0 + 2 * SECONDS_PER_DAY).to_string()
        );

        let parsed = Certificate::parse(&certificate).unwrap();
        assert_eq!(parsed.expiration(), T0 + 2 * SECONDS_PER_DAY);
        assert_eq!(parsed.encode(), certificate);
    }

    #[test]
    fn test_known_certificate() {
        // expiration 1750000000, issued one day earlier
        let (authority, _) = authority_at(T0 - SECONDS_PER_DAY);
        let certificate = authority.issue(TEST_KEY, 1).unwrap();

        assert_eq!(
            certificate,
            "egiWGmSutsrfV4yvLui8-cviTmmjKNbO983K_J44Aa8=.MTc1MDAwMDAwMA=="
        );

        let (authority, _) = authority_at(1_749_000_000);
        assert!(authority.verify(
            TEST_KEY,
            "egiWGmSutsrfV4yvLui8-cviTmmjKNbO983K_J44Aa8=.MTc1MDAwMDAwMA=="
        ));
    }

    #[test]
    fn test_signature_padding_required() {
        let (authority, _) = authority_at(T0);
        let certificate = authority.issue(TEST_KEY, 30).unwrap();
        let (signature, expiration) = certificate.split_once('.').unwrap();

        let unpadded = format!("{}.{}", signature.trim_end_matches('='), expiration);
        assert!(!authority.verify(TEST_KEY, &unpadded));
        assert_eq!(
            authority.inspect(TEST_KEY, &unpadded),
            Err(CertificateError::SignatureMismatch)
        );

        // the expiration field stays lenient
        let short_expiration = format!("{}.{}", signature, expiration.trim_end_matches('='));
        assert!(authority.verify(TEST_KEY, &short_expiration));
    }

    #[test]
    fn test_expiry_boundary() {
        let (authority, clock) = authority_at(T0);
        let certificate = authority.issue(TEST_KEY, 1).unwrap();

        clock.set(T0 + SECONDS_PER_DAY);
        assert!(authority.verify(TEST_KEY, &certificate));
        clock.set(T0 + SECONDS_PER_DAY + 1);
        assert!(!authority.verify(TEST_KEY, &certificate));

        for days in [0, -1, -365] {
            clock.set(T0);
            let certificate = authority.issue(TEST_KEY, days).unwrap();
            assert!(
                !authority.verify(TEST_KEY, &certificate),
                "{} day certificate verified",
                days
            );
        }
    }

    #[test]
    fn test_tampering_rejected() {
        let (authority, _) = authority_at(T0);
        let certificate = authority.issue(TEST_KEY, 30).unwrap();
        let (signature, expiration) = certificate.split_once('.').unwrap();

        // every position of the unpadded signature, flipped to another alphabet character
        for (i, c) in signature.trim_end_matches('=').char_indices() {
            let replacement = if c == 'A' { 'B' } else { 'A' };
            let mut tampered = signature.to_string();
            tampered.replace_range(i..i + 1, &replacement.to_string());
            let tampered = format!("{}.{}", tampered, expiration);
            assert!(!authority.verify(TEST_KEY, &tampered), "flip at {}", i);
        }

        let truncated = format!("{}.{}", &signature[..signature.len() - 5], expiration);
        assert!(!authority.verify(TEST_KEY, &truncated));

        let later = URL_SAFE.encode((T0 + 400 * SECONDS_PER_DAY).to_string());
        assert!(!authority.verify(TEST_KEY, &format!("{}.{}", signature, later)));
    }

    #[test]
    fn test_malformed_inputs() {
        let (authority, _) = authority_at(T0);
        let certificate = authority.issue(TEST_KEY, 30).unwrap();
        let not_a_number = URL_SAFE.encode("tomorrow");

        for bad in [
            String::new(),
            "no-separator".to_string(),
            "a.b.c".to_string(),
            format!(".{}", certificate.split_once('.').unwrap().1),
            format!("{}.", certificate.split_once('.').unwrap().0),
            format!("{}.{}", certificate.split_once('.').unwrap().0, not_a_number),
            format!("{}.!!!", certificate.split_once('.').unwrap().0),
        ] {
            assert!(!authority.verify(TEST_KEY, &bad), "accepted {:?}", bad);
        }

        assert!(!authority.verify("", &certificate));
        assert!(matches!(
            authority.inspect(TEST_KEY, "a.b.c"),
            Err(CertificateError::Malformed(_))
        ));
    }

    #[test]
    fn test_secret_sensitivity() {
        let (authority, clock) = authority_at(T0);
        let certificate = authority.issue(TEST_KEY, 30).unwrap();

        let other = CertificateAuthority::new(LicenseSecret::new("rotated-secret").unwrap())
            .with_clock(clock.clone());
        assert!(!other.verify(TEST_KEY, &certificate));
        assert_eq!(
            other.inspect(TEST_KEY, &certificate),
            Err(CertificateError::SignatureMismatch)
        );

        let same = CertificateAuthority::new(LicenseSecret::new(TEST_SECRET).unwrap())
            .with_clock(clock);
        assert!(same.verify(TEST_KEY, &certificate));
    }

    #[test]
    fn test_inspect_reports_reason() {
        let (authority, clock) = authority_at(T0);
        let certificate = authority.issue(TEST_KEY, 1).unwrap();

        assert!(matches!(
            authority.inspect(OTHER_KEY, &certificate),
            Err(CertificateError::SignatureMismatch)
        ));
        clock.advance_days(2);
        assert!(matches!(
            authority.inspect(TEST_KEY, &certificate),
            Err(CertificateError::Expired { expiration }) if expiration == T0 + SECONDS_PER_DAY
        ));
    }
}
