#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;
    use taskboard::libs::config::{
        Config, Profile, DEFAULT_PORT, DEFAULT_SECRET_KEY, PRODUCTION_SECRET_KEY,
    };
    use test_context::{test_context, TestContext};

    /// A fake environment; configuration never reads the real one in tests.
    struct ConfigTestContext {
        vars: HashMap<&'static str, String>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext { vars: HashMap::new() }
        }
    }

    impl ConfigTestContext {
        fn set(&mut self, key: &'static str, value: &str) {
            self.vars.insert(key, value.to_string());
        }

        fn load(&self) -> Config {
            Config::from_lookup(|key| self.vars.get(key).cloned())
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_profile_is_development(ctx: &mut ConfigTestContext) {
        let config = ctx.load();
        assert_eq!(config.profile, Profile::Development);
        assert_eq!(config.database, PathBuf::from("instance").join("tasks.db"));
        assert_eq!(config.secret_key, DEFAULT_SECRET_KEY);
        assert_eq!(config.log_level, "DEBUG");
        assert!(config.debug);
        assert!(!config.testing);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unknown_profile_falls_back(ctx: &mut ConfigTestContext) {
        ctx.set("APP_ENV", "staging");
        assert_eq!(ctx.load().profile, Profile::Development);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_development_honours_database_override(ctx: &mut ConfigTestContext) {
        ctx.set("DATABASE_URI", "/tmp/custom.db");
        ctx.set("LOG_LEVEL", "ERROR");
        let config = ctx.load();
        assert_eq!(config.database, PathBuf::from("/tmp/custom.db"));
        // Development always logs at debug level.
        assert_eq!(config.log_level, "DEBUG");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_testing_profile_uses_fixed_database(ctx: &mut ConfigTestContext) {
        ctx.set("APP_ENV", "testing");
        ctx.set("DATABASE_URI", "/tmp/ignored.db");
        let config = ctx.load();
        assert_eq!(config.profile, Profile::Testing);
        assert_eq!(config.database, PathBuf::from("instance").join("test.db"));
        assert!(config.testing);
        assert!(!config.debug);
        assert_eq!(config.log_level, "INFO");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_production_profile(ctx: &mut ConfigTestContext) {
        ctx.set("APP_ENV", "production");
        ctx.set("LOG_LEVEL", "warning");
        let config = ctx.load();
        assert_eq!(config.database, PathBuf::from("instance").join("production.db"));
        assert_eq!(config.secret_key, PRODUCTION_SECRET_KEY);
        assert_eq!(config.log_level, "WARNING");
        assert!(config.uses_placeholder_secret());

        ctx.set("SECRET_KEY", "s3cret");
        ctx.set("DATABASE_URI", "/srv/tasks.db");
        let config = ctx.load();
        assert_eq!(config.secret_key, "s3cret");
        assert_eq!(config.database, PathBuf::from("/srv/tasks.db"));
        assert!(!config.uses_placeholder_secret());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_server_settings(ctx: &mut ConfigTestContext) {
        ctx.set("HOST", "0.0.0.0");
        ctx.set("PORT", "8080");
        ctx.set("STATIC_DIR", "public");
        let config = ctx.load();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, PathBuf::from("public"));

        ctx.set("PORT", "not-a-port");
        assert_eq!(ctx.load().port, DEFAULT_PORT);
    }
}
