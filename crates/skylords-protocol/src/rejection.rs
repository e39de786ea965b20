//! Why the host refused a command.
//!
//! Rejections are diagnostic data. Nothing in this workspace retries a
//! rejected command on its own.

use crate::variant::variant_family;
use crate::{Tick, WhyCanNotPlayCardThere};

variant_family! {
    /// The closed set of refusal reasons.
    pub enum CommandRejectionReason as "CommandRejectionReason" {
        /// The card could not be played there.
        CardRejected {
            reason: WhyCanNotPlayCardThere,
            failed_card_conditions: Vec<u32>,
        },
        NotEnoughPower {
            player_power: f32,
            required: u32,
        },
        SpellDoesNotExist {},
        EntityDoesNotExist {},
        InvalidEntityType {
            entity_type: u32,
        },
        CanNotCast {
            failed_spell_conditions: Vec<u32>,
        },
        EntityNotOwned {},
        EntityOwnedBySomeoneElse {},
        NoModeChange {},
        EntityAlreadyInThisMode {},
        ModeNotExist {},
        InvalidCardIndex {},
        InvalidCard {},
        /// The card slot is still cooling down.
        CardOnCooldown {
            until: Tick,
        },
        /// The entity's spell is still cooling down.
        SpellOnCooldown {
            until: Tick,
        },
    }
}

impl CommandRejectionReason {
    /// The tick at which a cooldown rejection expires.
    pub fn cooldown_until(&self) -> Option<Tick> {
        match self {
            CommandRejectionReason::CardOnCooldown { until }
            | CommandRejectionReason::SpellOnCooldown { until } => Some(*until),
            _ => None,
        }
    }

    /// Whether the rejection is about ownership of the target entity.
    pub fn is_ownership(&self) -> bool {
        matches!(
            self,
            CommandRejectionReason::EntityNotOwned {}
                | CommandRejectionReason::EntityOwnedBySomeoneElse {}
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::variant::{self, VariantFamily};

    #[test]
    fn test_not_enough_power_wire_format() {
        let reason: CommandRejectionReason = variant::decode(json!({
            "NotEnoughPower": {"player_power": 42.5, "required": 70}
        }))
        .unwrap();
        assert_eq!(
            reason,
            CommandRejectionReason::NotEnoughPower { player_power: 42.5, required: 70 }
        );
    }

    #[test]
    fn test_card_rejected_reason_is_numeric() {
        let reason = CommandRejectionReason::CardRejected {
            reason: WhyCanNotPlayCardThere::InvalidPosition,
            failed_card_conditions: vec![3],
        };
        let wire = variant::encode(&reason).unwrap();
        assert_eq!(wire, json!({"CardRejected": {"reason": 32, "failed_card_conditions": [3]}}));
    }

    #[test]
    fn test_cooldown_carries_expiry_tick() {
        let reason: CommandRejectionReason =
            variant::decode(json!({"SpellOnCooldown": {"until": 1200}})).unwrap();
        assert_eq!(reason.cooldown_until(), Some(Tick(1200)));
        assert_eq!(CommandRejectionReason::InvalidCard {}.cooldown_until(), None);
    }

    #[test]
    fn test_ownership_reasons() {
        assert!(CommandRejectionReason::EntityNotOwned {}.is_ownership());
        assert!(!CommandRejectionReason::ModeNotExist {}.is_ownership());
    }

    #[test]
    fn test_reason_family_lists_all_shapes() {
        assert_eq!(CommandRejectionReason::SHAPES.len(), 15);
        assert!(CommandRejectionReason::knows("CardOnCooldown"));
    }
}
