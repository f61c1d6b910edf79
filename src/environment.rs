use serde::Serialize;

/// Settings used when the crate is built without the `production` feature.
pub static DEVELOPMENT: EnvironmentSettings = EnvironmentSettings {
    production: false,
    api_server_url: "http://127.0.0.1:5000",
    auth: AuthSettings {
        provider_domain_prefix: "coffee-shop-application",
        audience: "coffee-shop-app",
        client_id: "7uO05f5wr8954Wer0MjLz4YabjkC36U5",
        callback_url: "http://localhost:8100",
    },
};

/// Settings used when the crate is built with the `production` feature.
pub static PRODUCTION: EnvironmentSettings = EnvironmentSettings {
    production: true,
    api_server_url: "http://127.0.0.1:5000",
    auth: AuthSettings {
        provider_domain_prefix: "coffee-shop-application",
        audience: "coffee-shop-app",
        client_id: "7uO05f5wr8954Wer0MjLz4YabjkC36U5",
        callback_url: "http://localhost:8100",
    },
};

/// Build variant the settings belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// The variant selected at compile time through the `production` feature.
    pub const fn active() -> Self {
        if cfg!(feature = "production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn settings(self) -> &'static EnvironmentSettings {
        match self {
            Environment::Development => &DEVELOPMENT,
            Environment::Production => &PRODUCTION,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Process-wide, read-only settings of the coffee shop client.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSettings {
    pub production: bool,
    /// Base URL of the backend API.
    pub api_server_url: &'static str,
    pub auth: AuthSettings,
}

/// Identity provider settings used by the login and redirect flow.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthSettings {
    /// Tenant prefix of the provider domain.
    pub provider_domain_prefix: &'static str,
    /// Protected API the issued tokens target.
    pub audience: &'static str,
    pub client_id: &'static str,
    /// Where the provider redirects back to after login.
    #[serde(rename = "callbackURL")]
    pub callback_url: &'static str,
}

impl EnvironmentSettings {
    /// Settings of the variant this crate was built for.
    ///
    /// Every call returns the same reference.
    pub fn get() -> &'static EnvironmentSettings {
        Environment::active().settings()
    }

    pub fn environment(&self) -> Environment {
        if self.production {
            Environment::Production
        } else {
            Environment::Development
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::Value;

    fn string_fields(settings: &EnvironmentSettings) -> [(&'static str, &'static str); 5] {
        [
            ("api_server_url", settings.api_server_url),
            (
                "provider_domain_prefix",
                settings.auth.provider_domain_prefix,
            ),
            ("audience", settings.auth.audience),
            ("client_id", settings.auth.client_id),
            ("callback_url", settings.auth.callback_url),
        ]
    }

    fn keys(value: &Value) -> Vec<String> {
        let mut keys: Vec<String> = value
            .as_object()
            .map(|object| object.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }

    #[test]
    fn test_get_returns_same_reference_every_time() {
        // Act
        let first = EnvironmentSettings::get();
        let second = EnvironmentSettings::get();

        // Assert
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_get_matches_active_environment() {
        // Act
        let settings = EnvironmentSettings::get();

        // Assert
        assert_eq!(settings.environment(), Environment::active());
        assert_eq!(settings.production, Environment::active().is_production());
    }

    #[test]
    fn test_development_values() {
        // Act
        let settings = Environment::Development.settings();

        // Assert
        assert!(!settings.production);
        assert_eq!(settings.api_server_url, "http://127.0.0.1:5000");
        assert_eq!(
            settings.auth.provider_domain_prefix,
            "coffee-shop-application"
        );
        assert_eq!(settings.auth.audience, "coffee-shop-app");
        assert_eq!(settings.auth.client_id, "7uO05f5wr8954Wer0MjLz4YabjkC36U5");
        assert_eq!(settings.auth.callback_url, "http://localhost:8100");
    }

    #[test]
    fn test_production_flag_set_only_for_production() {
        assert!(!DEVELOPMENT.production);
        assert!(PRODUCTION.production);
        assert_eq!(DEVELOPMENT.environment(), Environment::Development);
        assert_eq!(PRODUCTION.environment(), Environment::Production);
        assert!(!Environment::Development.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_no_string_field_is_empty() {
        for settings in [&DEVELOPMENT, &PRODUCTION] {
            for (name, value) in string_fields(settings) {
                assert!(
                    !value.is_empty(),
                    "{} is empty for {:?}",
                    name,
                    settings.environment()
                );
            }
        }
    }

    #[test]
    fn test_serialized_shape() {
        // Act
        let json = serde_json::to_value(&DEVELOPMENT).unwrap();

        // Assert
        assert_eq!(keys(&json), vec!["apiServerUrl", "auth", "production"]);
        assert_eq!(
            keys(&json["auth"]),
            vec!["audience", "callbackURL", "clientId", "providerDomainPrefix"]
        );
        assert_eq!(json["production"], Value::Bool(false));
        assert_eq!(json["auth"]["callbackURL"], "http://localhost:8100");
    }

    #[test]
    fn test_variants_share_shape() {
        // Arrange
        let development = serde_json::to_value(&DEVELOPMENT).unwrap();
        let production = serde_json::to_value(&PRODUCTION).unwrap();

        // Assert
        assert_eq!(keys(&development), keys(&production));
        assert_eq!(keys(&development["auth"]), keys(&production["auth"]));
        assert!(production["production"].is_boolean());
        assert!(production["apiServerUrl"].is_string());
    }
}
