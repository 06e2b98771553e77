use slotplan_libs::Limits;
use std::env;
use tracing::Level;

pub struct Config {
    pub limits: Limits,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_vars(|key| env::var(key).ok())
    }

    /// Anything missing or unparseable falls back to its default. Request
    /// sizes are only capped when a limit is set.
    pub fn from_vars<F>(var: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_participants = var("MAX_PARTICIPANTS")
            .and_then(|e| e.parse::<usize>().ok())
            .unwrap_or(usize::MAX);
        let max_slots_per_participant = var("MAX_SLOTS_PER_PARTICIPANT")
            .and_then(|e| e.parse::<usize>().ok())
            .unwrap_or(usize::MAX);
        let log_level = var("LOG_LEVEL")
            .and_then(|e| e.parse::<Level>().ok())
            .unwrap_or(Level::INFO);

        Config {
            limits: Limits::new(max_participants, max_slots_per_participant),
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use slotplan_libs::Limits;
    use std::collections::HashMap;
    use tracing::Level;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_vars(|_| None);

        assert_eq!(config.limits, Limits::unbounded());
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn reads_overrides() {
        let vars: HashMap<&str, &str> = vec![
            ("MAX_PARTICIPANTS", "12"),
            ("MAX_SLOTS_PER_PARTICIPANT", "not a number"),
            ("LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let config = Config::from_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(
            config.limits,
            Limits::new(12, usize::MAX)
        );
        assert_eq!(config.log_level, Level::DEBUG);
    }
}
