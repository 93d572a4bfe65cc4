//! Strongly-typed trigger name wrapper.

use crate::newtype_string::define_newtype_string;

define_newtype_string! {
    /// The name of a catalog trigger, as returned by the trigger metadata
    /// view. Case-sensitive, opaque.
    pub struct TriggerName;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_name_creation() {
        let name = TriggerName::new("trg_orders_audit");
        assert_eq!(name.as_str(), "trg_orders_audit");
    }

    #[test]
    fn test_trigger_name_try_new_empty() {
        assert!(TriggerName::try_new("").is_none());
    }

    #[test]
    fn test_trigger_name_display() {
        let name = TriggerName::new("trg_orders_audit");
        assert_eq!(name.to_string(), "trg_orders_audit");
    }

    #[test]
    fn test_trigger_name_ord() {
        let a = TriggerName::new("trg_a");
        let b = TriggerName::new("trg_b");
        assert!(a < b);
    }
}
