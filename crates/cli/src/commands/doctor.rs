use serde::Serialize;
use tripdesk_core::config::{AppConfig, LoadOptions};
use tripdesk_core::forms::ACTION_NAMES;
use tripdesk_core::registry::ValidatorRegistry;
use tripdesk_core::slots::SlotSnapshot;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> String {
    let report = build_report();

    if json_output {
        return serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
    }

    render_human(&report)
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            checks.push(check_validator_registry(&config));
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(DoctorCheck {
                name: "validator_registry",
                status: CheckStatus::Skipped,
                details: "skipped because configuration did not load".to_string(),
            });
        }
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

/// Registers the enabled validators and runs each one against an empty form.
fn check_validator_registry(config: &AppConfig) -> DoctorCheck {
    let registry = ValidatorRegistry::with_defaults()
        .without(config.actions.disabled.iter().map(String::as_str));
    if registry.is_empty() {
        return DoctorCheck {
            name: "validator_registry",
            status: CheckStatus::Fail,
            details: "no form validators are enabled".to_string(),
        };
    }

    let empty = SlotSnapshot::new();
    let silent: Vec<&str> = registry
        .validators()
        .filter(|validator| validator.validate(&empty).prompts.is_empty())
        .map(|validator| validator.name())
        .collect();
    if !silent.is_empty() {
        return DoctorCheck {
            name: "validator_registry",
            status: CheckStatus::Fail,
            details: format!("validators did not prompt for an empty form: {}", silent.join(", ")),
        };
    }

    DoctorCheck {
        name: "validator_registry",
        status: CheckStatus::Pass,
        details: format!(
            "{} of {} form validators enabled",
            registry.len(),
            ACTION_NAMES.len()
        ),
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
