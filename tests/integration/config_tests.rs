//! Configuration loading

#[cfg(test)]
mod tests {
    use article_forge::config::{Config, DEV_LICENSE_SECRET};
    use article_forge::license::CertificateAuthority;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "license:\n  secret: from-file\n  validity_days: 10\ngeneration:\n  delay_secs: 30"
        )
        .unwrap();

        let config = Config::load(Some(file.path())).await.unwrap();
        assert_eq!(config.generation.delay_secs, 30);

        let authority = CertificateAuthority::from_config(&config.license).unwrap();
        assert_eq!(authority.default_validity_days(), 10);
    }

    #[tokio::test]
    async fn test_explicit_missing_file_fails() {
        assert!(Config::load(Some(std::path::Path::new("/nonexistent/forge.yaml")))
            .await
            .is_err());
    }

    #[test]
    fn test_certificates_depend_on_secret() {
        let mut config = Config::default();
        assert_eq!(config.license.secret, DEV_LICENSE_SECRET);
        let dev = CertificateAuthority::from_config(&config.license).unwrap();
        let certificate = dev.issue("sk-abc123", 1).unwrap();

        config
            .apply_env_with(|key| {
                (key == "ARTICLE_FORGE_LICENSE_SECRET").then(|| "production-secret".to_string())
            })
            .unwrap();
        let production = CertificateAuthority::from_config(&config.license).unwrap();
        assert!(!production.verify("sk-abc123", &certificate));
        assert!(dev.verify("sk-abc123", &certificate));
    }
}
