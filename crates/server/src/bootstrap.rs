use std::sync::Arc;

use tracing::info;
use tripdesk_core::audit::AuditSink;
use tripdesk_core::config::AppConfig;
use tripdesk_core::registry::ValidatorRegistry;

use crate::audit::TracingAuditSink;

pub struct Application {
    pub config: AppConfig,
    pub registry: Arc<ValidatorRegistry>,
    pub audit_sink: Arc<dyn AuditSink>,
}

pub fn bootstrap_with_config(config: AppConfig) -> Application {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let registry = ValidatorRegistry::with_defaults()
        .without(config.actions.disabled.iter().map(String::as_str));
    info!(
        event_name = "system.bootstrap.validators_registered",
        correlation_id = "bootstrap",
        registered = registry.len(),
        disabled = config.actions.disabled.len(),
        "form validators registered"
    );

    Application {
        config,
        registry: Arc::new(registry),
        audit_sink: Arc::new(TracingAuditSink),
    }
}

#[cfg(test)]
mod tests {
    use tripdesk_core::config::{AppConfig, ConfigOverrides, LoadOptions};
    use tripdesk_core::forms::{currency, weather};
    use tripdesk_core::slots::SlotSnapshot;

    use crate::bootstrap::{bootstrap_with_config, Application};

    fn bootstrap(options: LoadOptions) -> Result<Application, String> {
        AppConfig::load(options).map(bootstrap_with_config).map_err(|error| error.to_string())
    }

    #[test]
    fn bootstrap_fails_fast_on_unknown_disabled_action() {
        let result = bootstrap(LoadOptions {
            overrides: ConfigOverrides {
                disabled_actions: Some(vec!["validate_missing_form".to_string()]),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        });

        let message = result.err().expect("error");
        assert!(message.contains("validate_missing_form"));
    }

    #[test]
    fn bootstrap_registers_enabled_validators_only() {
        let app = bootstrap(LoadOptions {
            overrides: ConfigOverrides {
                disabled_actions: Some(vec![weather::ACTION_NAME.to_string()]),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        })
        .expect("bootstrap should succeed");

        assert_eq!(app.registry.len(), 6);
        assert!(app.registry.get(weather::ACTION_NAME).is_none());

        let outcome = app
            .registry
            .run(currency::ACTION_NAME, &SlotSnapshot::new().with(currency::SOURCE_CURRENCY, "USD"))
            .expect("currency validator should stay registered");
        assert_eq!(outcome.prompts.len(), 1);
    }
}
