use discord_alerts::cli::Cli;
use discord_alerts::config::Config;
use figment::Jail;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_full_valid_config() {
    // Jail serializes tests that touch the environment and working directory.
    Jail::expect_with(|_jail| {
        let toml_content = r#"
            log_level = "debug"
            host = "https://redash.example.com"
            [discord]
            webhook_url = "https://discord.com/api/webhooks/1/abc"
        "#;

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", toml_content).unwrap();

        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        let config = Config::load(&cli).unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.host, "https://redash.example.com");
        assert_eq!(
            config.destination_options().unwrap().url.expose(),
            "https://discord.com/api/webhooks/1/abc"
        );

        Ok(())
    });
}

#[test]
fn test_load_default_values() {
    Jail::expect_with(|_jail| {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "").unwrap();

        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        let config = Config::load(&cli).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, "info");
        assert!(config.destination_options().is_none());

        Ok(())
    });
}

#[test]
fn test_default_file_environment_and_cli_layering() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "discord-alerts.toml",
            r#"
                log_level = "warn"
                host = "https://from-file.example.com"
                [discord]
                webhook_url = "https://discord.com/api/webhooks/1/from-file"
            "#,
        )?;

        let config = Config::load(&Cli::default()).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.host, "https://from-file.example.com");

        jail.set_env("DISCORD_ALERTS_HOST", "https://from-env.example.com");
        jail.set_env(
            "DISCORD_ALERTS_DISCORD__WEBHOOK_URL",
            "https://discord.com/api/webhooks/1/from-env",
        );

        let config = Config::load(&Cli::default()).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.host, "https://from-env.example.com");
        assert_eq!(
            config.destination_options().unwrap().url.expose(),
            "https://discord.com/api/webhooks/1/from-env"
        );

        let cli = Cli {
            host: Some("https://from-cli.example.com".to_string()),
            webhook_url: Some("https://discord.com/api/webhooks/1/from-cli".to_string()),
            log_level: Some("trace".to_string()),
            ..Default::default()
        };
        let config = Config::load(&cli).unwrap();
        assert_eq!(config.log_level, "trace");
        assert_eq!(config.host, "https://from-cli.example.com");
        assert_eq!(
            config.destination_options().unwrap().url.expose(),
            "https://discord.com/api/webhooks/1/from-cli"
        );

        Ok(())
    });
}

#[test]
fn test_webhook_url_is_redacted_in_debug_output() {
    Jail::expect_with(|_jail| {
        let cli = Cli {
            webhook_url: Some("https://discord.com/api/webhooks/1/very-secret".to_string()),
            ..Default::default()
        };
        let config = Config::load(&cli).unwrap();

        assert!(!format!("{config:?}").contains("very-secret"));

        Ok(())
    });
}

#[test]
fn test_invalid_config_file_is_an_error() {
    Jail::expect_with(|_jail| {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "log_level = [").unwrap();

        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        assert!(Config::load(&cli).is_err());

        Ok(())
    });
}
