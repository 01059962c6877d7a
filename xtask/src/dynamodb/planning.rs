//! Pure functions for calculating deployment plans.

use super::config::{BillingMode, TableConfig};
use super::error::{DynamodbError, Result};

/// Represents the current state of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub status: TableStatus,
    /// Hash key attribute name.
    pub partition_key: Option<String>,
    /// Range key attribute name, if the table has one.
    pub sort_key: Option<String>,
    pub billing_mode: BillingMode,
}

/// Table status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

/// Planned changes for deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployPlan {
    /// Table doesn't exist, needs to be created.
    CreateTable { config: TableConfig },
    /// Table exists with the right keys but a different billing mode.
    UpdateBillingMode {
        table_name: String,
        from: BillingMode,
        to: BillingMode,
    },
    /// Table is up to date, no changes needed.
    NoChanges { table_name: String },
}

/// Plan for destroying a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyPlan {
    /// Table exists and will be deleted.
    DeleteTable { table_name: String },
    /// Table doesn't exist, nothing to do.
    AlreadyGone { table_name: String },
}

fn describe_keys(partition_key: Option<&str>, sort_key: Option<&str>) -> String {
    match (partition_key, sort_key) {
        (Some(pk), Some(sk)) => format!("({pk}, {sk})"),
        (Some(pk), None) => format!("({pk})"),
        (None, Some(sk)) => format!("(?, {sk})"),
        (None, None) => "()".to_string(),
    }
}

/// Calculate what changes are needed to reach the desired state.
///
/// Key schemas cannot be altered in place, so an existing table with
/// different keys is an error rather than a plan.
pub fn calculate_deploy_plan(
    current: Option<&TableState>,
    desired: &TableConfig,
) -> Result<DeployPlan> {
    let Some(state) = current else {
        return Ok(DeployPlan::CreateTable {
            config: desired.clone(),
        });
    };

    let keys_match = state.partition_key.as_deref() == Some(desired.partition_key.name.as_str())
        && state.sort_key.is_none();

    if !keys_match {
        return Err(DynamodbError::KeySchemaMismatch {
            table_name: desired.table_name.clone(),
            expected: describe_keys(Some(&desired.partition_key.name), None),
            actual: describe_keys(state.partition_key.as_deref(), state.sort_key.as_deref()),
        });
    }

    if state.billing_mode != desired.billing_mode {
        return Ok(DeployPlan::UpdateBillingMode {
            table_name: desired.table_name.clone(),
            from: state.billing_mode,
            to: desired.billing_mode,
        });
    }

    Ok(DeployPlan::NoChanges {
        table_name: desired.table_name.clone(),
    })
}

/// Calculate destroy plan.
pub fn calculate_destroy_plan(current: Option<&TableState>, table_name: &str) -> DestroyPlan {
    match current {
        Some(_) => DestroyPlan::DeleteTable {
            table_name: table_name.to_string(),
        },
        None => DestroyPlan::AlreadyGone {
            table_name: table_name.to_string(),
        },
    }
}

/// Format a deploy plan for display.
pub fn format_deploy_plan(plan: &DeployPlan) -> Vec<String> {
    match plan {
        DeployPlan::CreateTable { config } => vec![
            format!("+ Create table: {}", config.table_name),
            format!(
                "  Partition key: {} ({})",
                config.partition_key.name,
                config.partition_key.attribute_type.descriptor()
            ),
            format!("  Billing: {}", config.billing_mode.as_str()),
        ],
        DeployPlan::UpdateBillingMode {
            table_name,
            from,
            to,
        } => vec![
            format!("~ Update table: {table_name}"),
            format!("  Billing: {} -> {}", from.as_str(), to.as_str()),
        ],
        DeployPlan::NoChanges { table_name } => {
            vec![format!("= Table '{table_name}' is up to date")]
        }
    }
}

/// Format a destroy plan for display.
pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            vec![format!(
                "- Delete table: {table_name} (the stored cursor will be lost)"
            )]
        }
        DestroyPlan::AlreadyGone { table_name } => {
            vec![format!("= Table '{table_name}' does not exist")]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamodb::config::dropbox2slack_table_config;

    fn existing(
        partition_key: &str,
        sort_key: Option<&str>,
        billing_mode: BillingMode,
    ) -> TableState {
        TableState {
            status: TableStatus::Active,
            partition_key: Some(partition_key.to_string()),
            sort_key: sort_key.map(str::to_string),
            billing_mode,
        }
    }

    #[test]
    fn test_missing_table_is_created() {
        let desired = dropbox2slack_table_config();
        let plan = calculate_deploy_plan(None, &desired).unwrap();

        assert_eq!(plan, DeployPlan::CreateTable { config: desired });
    }

    #[test]
    fn test_matching_table_needs_no_changes() {
        let desired = dropbox2slack_table_config();
        let state = existing("id", None, BillingMode::PayPerRequest);

        let plan = calculate_deploy_plan(Some(&state), &desired).unwrap();

        assert_eq!(
            plan,
            DeployPlan::NoChanges {
                table_name: "dropbox2slack-table".to_string()
            }
        );
    }

    #[test]
    fn test_provisioned_table_switches_billing() {
        let desired = dropbox2slack_table_config();
        let state = existing("id", None, BillingMode::Provisioned);

        let plan = calculate_deploy_plan(Some(&state), &desired).unwrap();

        assert_eq!(
            plan,
            DeployPlan::UpdateBillingMode {
                table_name: "dropbox2slack-table".to_string(),
                from: BillingMode::Provisioned,
                to: BillingMode::PayPerRequest,
            }
        );
    }

    #[test]
    fn test_foreign_key_schema_is_rejected() {
        let desired = dropbox2slack_table_config();
        let state = existing("PK", Some("SK"), BillingMode::PayPerRequest);

        let err = calculate_deploy_plan(Some(&state), &desired).unwrap_err();

        assert_eq!(
            err,
            DynamodbError::KeySchemaMismatch {
                table_name: "dropbox2slack-table".to_string(),
                expected: "(id)".to_string(),
                actual: "(PK, SK)".to_string(),
            }
        );
    }

    #[test]
    fn test_destroy_plan() {
        let state = existing("id", None, BillingMode::PayPerRequest);

        assert_eq!(
            calculate_destroy_plan(Some(&state), "cursor"),
            DestroyPlan::DeleteTable {
                table_name: "cursor".to_string()
            }
        );
        assert_eq!(
            calculate_destroy_plan(None, "cursor"),
            DestroyPlan::AlreadyGone {
                table_name: "cursor".to_string()
            }
        );
    }

    #[test]
    fn test_format_create_plan() {
        let plan = DeployPlan::CreateTable {
            config: dropbox2slack_table_config(),
        };

        assert_eq!(
            format_deploy_plan(&plan),
            vec![
                "+ Create table: dropbox2slack-table".to_string(),
                "  Partition key: id (S)".to_string(),
                "  Billing: PAY_PER_REQUEST".to_string(),
            ]
        );
    }
}
