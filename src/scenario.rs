//! Builds influencers and subscribers from a [`Config`] and replays its actions.
//!
//! Every name used by an action is resolved when the scenario is built, so a
//! built scenario runs without failing.

use std::{collections::HashSet, sync::Arc};

use log::{debug, info};

use crate::{
    config::{Action, Config},
    errors::ScenarioError,
    influencer::{Article, Influencer},
    listener::{Listener, ListenerHandle},
    sns::{LaunchApp, OpenContent, SnsService},
    subscriber::Subscriber,
};

enum Step {
    Follow(Influencer, ListenerHandle<Subscriber>),
    Unfollow(Influencer, ListenerHandle<Subscriber>),
    Post(Influencer, Article),
}

pub struct Scenario {
    influencers: Vec<Influencer>,
    subscribers: Vec<ListenerHandle<Subscriber>>,
    steps: Vec<Step>,
}

impl Scenario {
    /// Wires `config` with subscribers opening posts through [`LaunchApp`].
    pub fn build(config: &Config) -> Result<Scenario, ScenarioError> {
        Self::build_with_opener(config, Arc::new(LaunchApp))
    }

    pub fn build_with_opener(
        config: &Config,
        opener: Arc<dyn OpenContent>,
    ) -> Result<Scenario, ScenarioError> {
        check_unique(&config.influencers)?;
        check_unique(&config.subscribers)?;

        let sns = Arc::new(SnsService::new(config.service.base_url.as_str()));
        let influencers: Vec<_> = config
            .influencers
            .iter()
            .map(|name| Influencer::with_service(name.as_str(), sns.clone()))
            .collect();
        let subscribers: Vec<_> = config
            .subscribers
            .iter()
            .map(|name| {
                ListenerHandle::new(Subscriber::with_opener(name.as_str(), opener.clone()))
            })
            .collect();

        let mut scenario = Scenario {
            influencers,
            subscribers,
            steps: Vec::with_capacity(config.actions.len()),
        };
        for action in &config.actions {
            let step = scenario.resolve(action)?;
            scenario.steps.push(step);
        }
        debug!(
            "scenario: {} influencer(s), {} subscriber(s), {} step(s)",
            scenario.influencers.len(),
            scenario.subscribers.len(),
            scenario.steps.len()
        );
        Ok(scenario)
    }

    fn resolve(&self, action: &Action) -> Result<Step, ScenarioError> {
        let step = match action {
            Action::Follow {
                influencer,
                subscriber,
            } => Step::Follow(
                self.lookup_influencer(influencer)?,
                self.lookup_subscriber(subscriber)?,
            ),
            Action::Unfollow {
                influencer,
                subscriber,
            } => Step::Unfollow(
                self.lookup_influencer(influencer)?,
                self.lookup_subscriber(subscriber)?,
            ),
            Action::Post { influencer, title } => Step::Post(
                self.lookup_influencer(influencer)?,
                Article::new(title.as_str()),
            ),
        };
        Ok(step)
    }

    fn lookup_influencer(&self, name: &str) -> Result<Influencer, ScenarioError> {
        self.influencer(name)
            .cloned()
            .ok_or_else(|| ScenarioError::UnknownInfluencer(name.to_string()))
    }

    fn lookup_subscriber(&self, name: &str) -> Result<ListenerHandle<Subscriber>, ScenarioError> {
        self.subscriber(name)
            .cloned()
            .ok_or_else(|| ScenarioError::UnknownSubscriber(name.to_string()))
    }

    pub fn influencer(&self, name: &str) -> Option<&Influencer> {
        self.influencers.iter().find(|i| i.name() == name)
    }

    pub fn subscriber(&self, name: &str) -> Option<&ListenerHandle<Subscriber>> {
        self.subscribers.iter().find(|s| s.name() == name)
    }

    pub fn subscribers(&self) -> &[ListenerHandle<Subscriber>] {
        &self.subscribers
    }

    /// Replays every step in order.
    pub fn run(&self) {
        for step in &self.steps {
            match step {
                Step::Follow(influencer, subscriber) => {
                    info!("{} follows {}", subscriber.name(), influencer.name());
                    influencer.add_listener(subscriber.clone());
                }
                Step::Unfollow(influencer, subscriber) => {
                    info!("{} unfollows {}", subscriber.name(), influencer.name());
                    influencer.remove_listener(subscriber);
                }
                Step::Post(influencer, article) => influencer.post(article.clone()),
            }
        }
    }
}

fn check_unique(names: &[String]) -> Result<(), ScenarioError> {
    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(ScenarioError::DuplicateName(name.clone()));
        }
    }
    Ok(())
}
