//! Scenario configuration.
//!
//! A configuration names the influencers and subscribers to create and lists
//! the actions to replay against them. It is read from TOML:
//!
//! ```toml
//! influencers = ["Maezawa"]
//! subscribers = ["Tanaka", "Suzuki"]
//!
//! [service]
//! base_url = "https://www.twitttter.com"
//!
//! [[actions]]
//! follow = { influencer = "Maezawa", subscriber = "Tanaka" }
//!
//! [[actions]]
//! post = { influencer = "Maezawa", title = "moon_trip" }
//! ```

use std::path::Path;

use log::info;
use serde::Deserialize;
use tokio::fs;

use crate::{errors::ConfigError, sns::DEFAULT_BASE_URL};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// One step of a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Follow {
        influencer: String,
        subscriber: String,
    },
    Unfollow {
        influencer: String,
        subscriber: String,
    },
    Post {
        influencer: String,
        title: String,
    },
}

impl Action {
    pub fn follow(influencer: &str, subscriber: &str) -> Self {
        Action::Follow {
            influencer: influencer.to_string(),
            subscriber: subscriber.to_string(),
        }
    }

    pub fn unfollow(influencer: &str, subscriber: &str) -> Self {
        Action::Unfollow {
            influencer: influencer.to_string(),
            subscriber: subscriber.to_string(),
        }
    }

    pub fn post(influencer: &str, title: &str) -> Self {
        Action::Post {
            influencer: influencer.to_string(),
            title: title.to_string(),
        }
    }
}

/// A scenario description. Omitted fields are empty, not the built-in scenario.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub influencers: Vec<String>,
    #[serde(default)]
    pub subscribers: Vec<String>,
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl Config {
    /// Reads and parses the configuration file at `path`.
    pub async fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Config::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            "loaded {} action(s) from '{}'",
            config.actions.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(contents)
    }
}

impl Default for Config {
    /// Two influencers, three followers each; every influencer posts, loses a
    /// follower and posts again.
    fn default() -> Self {
        let influencers = ["Maezawa", "Horiemon"];
        let subscribers = ["Tanaka", "Suzuki", "Yamada"];

        let mut actions = Vec::new();
        for influencer in influencers {
            for subscriber in subscribers {
                actions.push(Action::follow(influencer, subscriber));
            }
        }
        actions.extend([
            Action::post("Maezawa", "maezawa_moon_trip"),
            Action::post("Horiemon", "horiemon_livedoor_collapse"),
            Action::unfollow("Maezawa", "Tanaka"),
            Action::unfollow("Horiemon", "Yamada"),
            Action::post("Maezawa", "hikakin_money_giveaway"),
            Action::post("Horiemon", "yakiniku_shop"),
        ]);

        Config {
            influencers: influencers.map(String::from).to_vec(),
            subscribers: subscribers.map(String::from).to_vec(),
            service: ServiceConfig::default(),
            actions,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Action, Config};
    use crate::{errors::ConfigError, sns::DEFAULT_BASE_URL};

    #[test]
    fn parses_full_config() {
        let config = Config::parse(
            r#"
            influencers = ["P"]
            subscribers = ["A", "B"]

            [service]
            base_url = "http://localhost:8080"

            [[actions]]
            follow = { influencer = "P", subscriber = "A" }

            [[actions]]
            unfollow = { influencer = "P", subscriber = "A" }

            [[actions]]
            post = { influencer = "P", title = "x" }
            "#,
        )
        .unwrap();

        assert_eq!(config.influencers, ["P"]);
        assert_eq!(config.subscribers, ["A", "B"]);
        assert_eq!(config.service.base_url, "http://localhost:8080");
        assert_eq!(
            config.actions,
            [
                Action::follow("P", "A"),
                Action::unfollow("P", "A"),
                Action::post("P", "x"),
            ]
        );
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config = Config::parse(r#"influencers = ["P"]"#).unwrap();

        assert_eq!(config.service.base_url, DEFAULT_BASE_URL);
        assert!(config.subscribers.is_empty());
        assert!(config.actions.is_empty());
    }

    #[test]
    fn unknown_action_is_rejected() {
        let err = Config::parse(
            r#"
            [[actions]]
            repost = { influencer = "P", title = "x" }
            "#,
        );

        assert!(err.is_err());
    }

    #[test]
    fn default_follows_everyone_then_drops_two() {
        let config = Config::default();

        assert_eq!(config.influencers.len(), 2);
        assert_eq!(config.subscribers.len(), 3);
        assert_eq!(config.actions.len(), 12);
        assert_eq!(config.actions[8], Action::unfollow("Maezawa", "Tanaka"));
    }

    #[tokio::test]
    async fn load_reports_missing_file() {
        let err = Config::load("/definitely/not/here.toml").await.unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
        assert_eq!(err.as_label(), "config_read");
    }

    #[tokio::test]
    async fn load_reads_file() {
        let path = std::env::temp_dir().join(format!("influencer-{}.toml", std::process::id()));
        let contents = "subscribers = [\"A\"]\n\n[[actions]]\npost = { influencer = \"P\", title = \"x\" }\n";
        tokio::fs::write(&path, contents).await.unwrap();

        let loaded = Config::load(&path).await;
        let _ = tokio::fs::remove_file(&path).await;

        let config = loaded.unwrap();
        assert_eq!(config.subscribers, ["A"]);
        assert_eq!(config.actions, [Action::post("P", "x")]);
    }

    #[tokio::test]
    async fn load_reports_bad_toml() {
        let path = std::env::temp_dir().join(format!("influencer-bad-{}.toml", std::process::id()));
        tokio::fs::write(&path, "influencers = [").await.unwrap();

        let loaded = Config::load(&path).await;
        let _ = tokio::fs::remove_file(&path).await;

        assert_eq!(loaded.unwrap_err().as_label(), "config_parse");
    }
}
