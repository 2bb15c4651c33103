use crate::domain::common::entities::app_errors::CoreError;

/// Shared policy holder. Area-specific policy traits (recipes, lists,
/// cities, …) are implemented on this type in their own modules; role data
/// travels inside [`Identity`](crate::domain::user::value_objects::Identity)
/// so no repository access is needed here.
#[derive(Debug, Clone, Copy, Default)]
pub struct WasfaPolicy;

impl WasfaPolicy {
    pub fn new() -> Self {
        Self
    }
}

pub fn ensure_policy(result: Result<bool, CoreError>, message: &str) -> Result<(), CoreError> {
    match result {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(message.to_string())),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_policy_passes_through_grants() {
        assert!(ensure_policy(Ok(true), "nope").is_ok());
    }

    #[test]
    fn ensure_policy_maps_denial_to_forbidden() {
        let err = ensure_policy(Ok(false), "insufficient permissions").unwrap_err();
        assert_eq!(
            err,
            CoreError::Forbidden("insufficient permissions".to_string())
        );
    }
}
